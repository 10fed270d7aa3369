use reqwest::{Url, blocking::Client, header::AUTHORIZATION};

use crate::{
    Error, Res,
    config::{Config, SPOTIFY_SCOPE},
    types::TokenResponse,
};

/// Builds the authorization page URL the user is sent to.
///
/// # Example
///
/// ```
/// let url = authorization_url(&config)?;
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=code
/// //     &redirect_uri=http%3A%2F%2Flocalhost%3A8888%2Fcallback&scope=user-top-read
/// ```
pub fn authorization_url(config: &Config) -> Res<Url> {
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", SPOTIFY_SCOPE),
        ],
    )
    .map_err(|e| Error::validation(format!("Invalid authorization URL: {}", e)))
}

/// Makes sure the authorization page answers before the browser is opened.
///
/// # Errors
///
/// Fails with `Authentication failed!` on any non-2xx status.
pub fn check_authorization_endpoint(client: &Client, url: &Url) -> Res<()> {
    let response = client.get(url.clone()).send()?;
    if !response.status().is_success() {
        return Err(Error::validation("Authentication failed!"));
    }
    Ok(())
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Authenticates with HTTP Basic `base64(client_id:client_secret)` and sends
/// the same redirect URI that was used to obtain the code.
pub fn exchange_code(client: &Client, config: &Config, code: &str) -> Res<TokenResponse> {
    request_token(
        client,
        config,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ],
    )
}

/// Exchanges a refresh token for a fresh access token.
pub fn refresh_token(client: &Client, config: &Config, refresh_token: &str) -> Res<TokenResponse> {
    request_token(
        client,
        config,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ],
    )
}

fn request_token(client: &Client, config: &Config, form: &[(&str, &str)]) -> Res<TokenResponse> {
    // credentials are checked before anything goes over the wire
    let basic = config.basic_auth()?;

    let response = client
        .post(&config.token_url)
        .header(AUTHORIZATION, format!("Basic {}", basic))
        .form(form)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(Error::validation(format!(
            "Token request failed with status {}: {}",
            status, body
        )));
    }

    Ok(response.json::<TokenResponse>()?)
}

/// Extracts the authorization code from what the user pasted.
///
/// Accepts the bare code as well as the full callback URL the browser was
/// redirected to (`...?code=<code>`).
pub fn code_from_input(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match Url::parse(input) {
        Ok(url) => url
            .query_pairs()
            .find(|(key, _)| key == "code")
            .map(|(_, value)| value.into_owned()),
        Err(_) => Some(input.to_string()),
    }
}

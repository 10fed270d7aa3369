use std::io::{self, Write};

use chrono::{DateTime, Duration, Utc};
use reqwest::blocking::Client;

use crate::{
    Error, Res,
    config::Config,
    info,
    management::record,
    spotify,
    types::{Credentials, TokenResponse},
    warning,
};

/// How many times the token state may be repaired (authorize or refresh)
/// before giving up. Restoring an expired record and refreshing it takes two.
const MAX_REPAIRS: usize = 2;

/// The user-facing half of the authorization-code flow.
pub trait AuthorizationPrompt {
    /// Shows the authorization page at `url` to the user.
    fn open(&mut self, url: &str);

    /// Blocks until the user hands back the authorization code.
    fn read_code(&mut self) -> Res<String>;
}

/// Opens the default browser and reads the code from stdin.
pub struct ConsolePrompt;

impl AuthorizationPrompt for ConsolePrompt {
    fn open(&mut self, url: &str) {
        info!("Opening the Spotify authorization page in your browser...");
        if webbrowser::open(url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }

    fn read_code(&mut self) -> Res<String> {
        print!("Your code is:\n> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        spotify::auth::code_from_input(&input)
            .ok_or_else(|| Error::validation("No authorization code entered"))
    }
}

enum TokenState {
    Missing,
    Expired,
    Valid(String),
}

/// Owns the OAuth credentials for the lifetime of the process.
///
/// Every mutation of the credentials is followed by [`TokenManager::persist`],
/// so the record on disk always mirrors the value held here.
pub struct TokenManager {
    config: Config,
    credentials: Credentials,
    http: Client,
    prompt: Box<dyn AuthorizationPrompt>,
}

impl TokenManager {
    pub fn new(config: Config) -> Self {
        Self::with_prompt(config, ConsolePrompt)
    }

    pub fn with_prompt(config: Config, prompt: impl AuthorizationPrompt + 'static) -> Self {
        TokenManager {
            config,
            credentials: Credentials::empty(),
            http: Client::new(),
            prompt: Box::new(prompt),
        }
    }

    /// Returns a bearer token that is valid right now.
    ///
    /// Without a token the interactive authorization runs (which may restore
    /// the record instead), an expired token is refreshed. After at most
    /// [`MAX_REPAIRS`] such steps a still unusable token is an error.
    pub fn get_valid_access_token(&mut self) -> Res<String> {
        for _ in 0..MAX_REPAIRS {
            match self.state() {
                TokenState::Valid(token) => return Ok(token),
                TokenState::Missing => self.run_interactive_authorization()?,
                TokenState::Expired => self.refresh()?,
            }
        }

        match self.state() {
            TokenState::Valid(token) => Ok(token),
            TokenState::Missing | TokenState::Expired => Err(Error::validation(
                "Spotify did not issue a usable access token",
            )),
        }
    }

    /// Obtains credentials from the record or, failing that, from the user.
    ///
    /// A record holding an access token ends the flow without any network or
    /// user interaction; its expiry is dealt with by the caller. A record whose
    /// token is expired and which has no refresh token is ignored. Otherwise the
    /// authorization page is checked, shown to the user, and the code they
    /// paste back is exchanged for a token pair which is then persisted.
    pub fn run_interactive_authorization(&mut self) -> Res<()> {
        if let Some(restored) = record::load_record(&self.config.credentials_path) {
            let recoverable = restored.refresh_token.is_some()
                || restored.usable_token(Utc::now()).is_some();
            if restored.access_token.is_some() && recoverable {
                self.credentials = restored;
                return Ok(());
            }
            if restored.access_token.is_some() {
                info!("Stored access token expired and cannot be refreshed, authorizing again.");
            }
        }

        self.config.basic_auth()?;
        let url = spotify::auth::authorization_url(&self.config)?;
        spotify::auth::check_authorization_endpoint(&self.http, &url)?;

        self.prompt.open(url.as_str());
        let code = self.prompt.read_code()?;
        let token = spotify::auth::exchange_code(&self.http, &self.config, &code)?;

        self.credentials = Credentials {
            authorization_code: Some(code),
            access_token: Some(token.access_token.clone()),
            refresh_token: token.refresh_token.clone(),
            access_token_expires: expires_at(&token),
        };
        self.persist()
    }

    /// Trades the held refresh token for a new access token.
    ///
    /// The refresh token itself is kept as is.
    pub fn refresh(&mut self) -> Res<()> {
        let Some(refresh_token) = self.credentials.refresh_token.clone() else {
            return Err(Error::validation(
                "No refresh token available. Please authorize again.",
            ));
        };

        let token = spotify::auth::refresh_token(&self.http, &self.config, &refresh_token)?;
        self.credentials.access_token = Some(token.access_token.clone());
        self.credentials.access_token_expires = expires_at(&token);
        self.persist()
    }

    pub fn persist(&self) -> Res<()> {
        record::save_record(&self.config.credentials_path, &self.credentials)
    }

    pub fn current_credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    fn state(&self) -> TokenState {
        if self.credentials.access_token.is_none() {
            return TokenState::Missing;
        }
        match self.credentials.usable_token(Utc::now()) {
            Some(token) => TokenState::Valid(token.to_string()),
            None => TokenState::Expired,
        }
    }
}

fn expires_at(token: &TokenResponse) -> DateTime<Utc> {
    Utc::now() + Duration::seconds(token.expires_in)
}

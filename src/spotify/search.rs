use crate::{
    Error, Res,
    management::TokenManager,
    request::SearchRequest,
    spotify::normalize,
    types::{Entities, SearchResponse},
};

/// Searches the Spotify catalog and returns a short preview.
///
/// The query is passed through Spotify's own search grammar: with both an
/// operator and an operator query present, `<query> <OR|NOT> <operator
/// query>` is sent as `q`. Results are capped per type (5 tracks, 2 artists,
/// 2 albums) before positions are assigned.
///
/// # Errors
///
/// Fails with `A query is required` for a blank query. A non-2xx response
/// yields an empty result instead of an error.
pub fn search(tokens: &mut TokenManager, request: &SearchRequest) -> Res<Entities> {
    if request.query.trim().is_empty() {
        return Err(Error::validation("A query is required"));
    }

    let token = tokens.get_valid_access_token()?;
    let api_url = format!("{uri}/search", uri = tokens.config().api_url);

    let response = tokens
        .http()
        .get(&api_url)
        .bearer_auth(token)
        .query(&[
            ("q", request.query_string()),
            ("type", request.kind.as_str().to_string()),
        ])
        .send()?;

    if !response.status().is_success() {
        return Ok(Entities::empty_search(request.kind));
    }

    let body = response.json::<SearchResponse>()?;
    Ok(normalize::search_results(body, request.kind))
}

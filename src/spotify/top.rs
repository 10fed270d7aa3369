use crate::{
    Res,
    management::TokenManager,
    request::TopRequest,
    spotify::normalize,
    types::{Entities, Paging, RawArtist, RawTrack, TopKind},
};

/// Retrieves the current user's top tracks or artists.
///
/// Issues `GET /me/top/{type}` with the requested time range, limit and
/// offset. The bearer token comes from `tokens`, which authorizes or
/// refreshes first if needed.
///
/// # Returns
///
/// Every returned item normalized, positions `1..=n` in response order. A
/// non-2xx response is not an error: it yields an empty result of the
/// requested kind.
///
/// # Example
///
/// ```
/// let request = TopRequest { kind: TopKind::Artists, ..TopRequest::default() };
/// let artists = get_top_items(&mut tokens, &request)?;
/// ```
pub fn get_top_items(tokens: &mut TokenManager, request: &TopRequest) -> Res<Entities> {
    let token = tokens.get_valid_access_token()?;
    let api_url = format!(
        "{uri}/me/top/{kind}",
        uri = tokens.config().api_url,
        kind = request.kind.as_str()
    );

    let response = tokens
        .http()
        .get(&api_url)
        .bearer_auth(token)
        .query(&[
            ("time_range", request.time_range.as_str().to_string()),
            ("limit", request.limit.to_string()),
            ("offset", request.offset.to_string()),
        ])
        .send()?;

    if !response.status().is_success() {
        return Ok(Entities::empty_top(request.kind));
    }

    let entities = match request.kind {
        TopKind::Tracks => {
            let page = response.json::<Paging<RawTrack>>()?;
            Entities::Tracks(normalize::ranked(page.items, None, normalize::track))
        }
        TopKind::Artists => {
            let page = response.json::<Paging<RawArtist>>()?;
            Entities::Artists(normalize::ranked(page.items, None, normalize::artist))
        }
    };
    Ok(entities)
}

use crate::{
    Res, cli::render, management::TokenManager, request::SearchRequest, spotify, utils,
};

/// Runs `search <query> <operator|_> <operator_query|_> <type|_>` and prints
/// the resulting table.
pub fn search(tokens: &mut TokenManager, args: &[String]) -> Res<()> {
    let request = SearchRequest::from_tokens(args)?;
    tokens.get_valid_access_token()?;

    let pb = utils::spinner(&format!("Searching for \"{}\"...", request.query_string()));
    let result = spotify::search::search(tokens, &request);
    pb.finish_and_clear();

    render::print_entities(&result?);
    Ok(())
}

use crate::{
    Res, cli::render, management::TokenManager, request::TopRequest, spotify, utils,
};

/// Runs `top <type|_> <time_range|_> <limit|_> <offset|_>` and prints the
/// resulting table.
///
/// Authorization happens before the spinner starts so that the code prompt
/// is never drawn over.
pub fn top(tokens: &mut TokenManager, args: &[String]) -> Res<()> {
    let request = TopRequest::from_tokens(args)?;
    tokens.get_valid_access_token()?;

    let pb = utils::spinner(&format!("Fetching top {}...", request.kind.as_str()));
    let result = spotify::top::get_top_items(tokens, &request);
    pb.finish_and_clear();

    render::print_entities(&result?);
    Ok(())
}

use crate::{Res, management::TokenManager, success};

pub fn auth(tokens: &mut TokenManager) -> Res<()> {
    tokens.get_valid_access_token()?;
    success!("Authentication successful!");
    Ok(())
}

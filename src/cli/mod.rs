//! # CLI Module
//!
//! This module provides the command-line interface layer for spotq. It
//! implements the user-facing commands and the interactive prompt loop, and
//! coordinates between the token manager, the Spotify client and the table
//! renderer.
//!
//! ## Command Categories
//!
//! - [`auth`] - Makes sure a usable access token exists (restore, refresh or
//!   interactive authorization)
//! - [`top`] - Personalized top tracks or artists
//! - [`search`] - Catalog search preview
//! - [`help`] - Command reference for the prompt loop
//! - [`shell`] - Interactive prompt reading one command per line
//!
//! ## Command Grammar
//!
//! ```text
//! top <tracks|artists|_> <short|medium|long|_> <1..50|_> <0..49|_>
//! search <query> <or|not|_> <operator query|_> <track|artist|album|_>
//! ```
//!
//! Arguments containing spaces are wrapped in double quotes:
//!
//! ```text
//! >search "daft punk" _ _ artist
//! >search "one more time" or "around the world" track
//! ```
//!
//! ## Error Handling
//!
//! Commands return [`crate::Res`]. The prompt loop prints every command error
//! and keeps reading, only a broken terminal ends it. `main` exits with
//! status 1 on any error that reaches it.

mod auth;
mod help;
mod render;
mod search;
mod shell;
mod top;

pub use auth::auth;
pub use help::help;
pub use render::print_entities;
pub use render::render;
pub use search::search;
pub use shell::Flow;
pub use shell::execute;
pub use shell::prompt_loop;
pub use shell::shell;
pub use top::top;

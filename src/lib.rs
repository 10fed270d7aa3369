//! Spotify Top & Search CLI Library
//!
//! This library provides the building blocks of `spotq`: an OAuth 2.0
//! authorization-code client for the Spotify Web API that caches its tokens,
//! refreshes them transparently, and answers two read-only questions, "what
//! are my top tracks/artists" and "what does the catalog return for this
//! search".
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations and the prompt loop
//! - `config` - Configuration management and environment variables
//! - `error` - The crate error type
//! - `management` - Credential ownership, persistence and token lifecycle
//! - `request` - Validation of positional `top` and `search` arguments
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotq::{config, management::TokenManager, request::TopRequest, spotify};
//!
//! fn main() -> spotq::Res<()> {
//!     config::load_env().map_err(spotq::Error::Validation)?;
//!     let mut tokens = TokenManager::new(config::Config::from_env());
//!     let top = spotify::top::get_top_items(&mut tokens, &TopRequest::default())?;
//!     println!("{} tracks", top.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod request;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate reports an [`Error`]. Validation
/// failures carry a human-readable message meant to be shown to the user as
/// is; transport, JSON and I/O failures wrap their source error.
///
/// # Example
///
/// ```
/// use spotq::Res;
///
/// fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Opening the authorization page...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only used by one-shot commands;
/// the interactive prompt loop reports errors with [`warning!`] and keeps
/// running.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a browser that cannot be launched or
/// a command rejected by the prompt loop.
///
/// # Example
///
/// ```
/// warning!("limit must be between 1 and 50");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

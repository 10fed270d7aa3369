//! Configuration management for spotq.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a single [`Config`]
//! value holding the Spotify client credentials, the endpoint URLs and the
//! location of the credential record.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{Error, Res};

/// Permission requested during authorization. Top items need nothing else.
pub const SPOTIFY_SCOPE: &str = "user-top-read";

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:8888/callback";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for the file in the platform-specific local data directory under
/// `spotq/.env`:
/// - Linux: `~/.local/share/spotq/.env`
/// - macOS: `~/Library/Application Support/spotq/.env`
/// - Windows: `%LOCALAPPDATA%/spotq/.env`
///
/// A missing file is not an error, the process environment is then used
/// alone.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or the
/// `.env` file exists but cannot be parsed.
pub fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Runtime configuration for the Spotify client.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub redirect_uri: String,
    pub credentials_path: PathBuf,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// | Variable                         | Default                                   |
    /// |----------------------------------|-------------------------------------------|
    /// | `SPOTIFY_API_AUTH_CLIENT_ID`     | empty                                     |
    /// | `SPOTIFY_API_AUTH_CLIENT_SECRET` | empty                                     |
    /// | `SPOTIFY_API_AUTH_URL`           | `https://accounts.spotify.com/authorize`  |
    /// | `SPOTIFY_API_TOKEN_URL`          | `https://accounts.spotify.com/api/token`  |
    /// | `SPOTIFY_API_URL`                | `https://api.spotify.com/v1`              |
    /// | `SPOTIFY_API_REDIRECT_URI`       | `http://localhost:8888/callback`          |
    /// | `SPOTQ_CREDENTIALS_FILE`         | `<data dir>/spotq/cache/tokens.json`      |
    ///
    /// Missing client credentials are not rejected here; every token
    /// exchange checks them before touching the network.
    pub fn from_env() -> Self {
        Self {
            client_id: env_or("SPOTIFY_API_AUTH_CLIENT_ID", ""),
            client_secret: env_or("SPOTIFY_API_AUTH_CLIENT_SECRET", ""),
            auth_url: env_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: env_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: env_or("SPOTIFY_API_URL", DEFAULT_API_URL),
            redirect_uri: env_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            credentials_path: env::var("SPOTQ_CREDENTIALS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_credentials_path()),
        }
    }

    /// Configuration pointing every endpoint at `base_url`, as served by a
    /// local mock of the Spotify accounts and Web API hosts.
    pub fn for_base_url(
        base_url: &str,
        client_id: &str,
        client_secret: &str,
        credentials_path: PathBuf,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            auth_url: format!("{base_url}/authorize"),
            token_url: format!("{base_url}/api/token"),
            api_url: format!("{base_url}/v1"),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            credentials_path,
        }
    }

    pub fn with_credentials_path(mut self, path: PathBuf) -> Self {
        self.credentials_path = path;
        self
    }

    /// Returns the value of the `Authorization: Basic` header used on the
    /// token endpoint, `base64(client_id:client_secret)`.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when either credential is empty.
    pub fn basic_auth(&self) -> Res<String> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(Error::validation(
                "You must set client id and client secret!",
            ));
        }
        let creds = format!("{}:{}", self.client_id, self.client_secret);
        Ok(STANDARD.encode(creds))
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotq");
    path
}

fn default_credentials_path() -> PathBuf {
    let mut path = data_dir();
    path.push("cache/tokens.json");
    path
}

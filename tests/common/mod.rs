#![allow(dead_code)]

use std::{cell::RefCell, path::PathBuf, rc::Rc};

use chrono::{Duration, Utc};
use mockito::ServerGuard;
use serde_json::{Value, json};
use spotq::{
    Res,
    config::Config,
    management::{AuthorizationPrompt, TokenManager, record},
    types::Credentials,
};
use tempfile::TempDir;

pub const CLIENT_ID: &str = "client";
pub const CLIENT_SECRET: &str = "secret";
/// base64("client:secret")
pub const BASIC_AUTH: &str = "Basic Y2xpZW50OnNlY3JldA==";

/// Prompt that records the URLs it was asked to open and answers with a
/// fixed code.
#[derive(Clone, Default)]
pub struct ScriptedPrompt {
    pub code: String,
    pub opened: Rc<RefCell<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn answering(code: &str) -> Self {
        Self {
            code: code.to_string(),
            opened: Rc::default(),
        }
    }
}

impl AuthorizationPrompt for ScriptedPrompt {
    fn open(&mut self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }

    fn read_code(&mut self) -> Res<String> {
        Ok(self.code.clone())
    }
}

pub struct Fixture {
    pub server: ServerGuard,
    pub dir: TempDir,
    pub prompt: ScriptedPrompt,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            server: mockito::Server::new(),
            dir: tempfile::tempdir().unwrap(),
            prompt: ScriptedPrompt::answering("the-code"),
        }
    }

    pub fn record_path(&self) -> PathBuf {
        self.dir.path().join("cache/tokens.json")
    }

    pub fn config(&self) -> Config {
        Config::for_base_url(
            &self.server.url(),
            CLIENT_ID,
            CLIENT_SECRET,
            self.record_path(),
        )
    }

    pub fn token_manager(&self) -> TokenManager {
        TokenManager::with_prompt(self.config(), self.prompt.clone())
    }

    /// Writes a record holding `access` / `refresh` that expires
    /// `expires_in_secs` from now (negative for an expired token).
    pub fn write_record(&self, access: &str, refresh: Option<&str>, expires_in_secs: i64) {
        let credentials = Credentials {
            authorization_code: Some("old-code".to_string()),
            access_token: Some(access.to_string()),
            refresh_token: refresh.map(str::to_string),
            access_token_expires: Utc::now() + Duration::seconds(expires_in_secs),
        };
        record::save_record(&self.record_path(), &credentials).unwrap();
    }

    pub fn write_raw_record(&self, contents: &str) {
        let path = self.record_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }
}

pub fn raw_track(index: usize) -> Value {
    json!({
        "id": format!("track{index}"),
        "name": format!("Track {index}"),
        "duration_ms": 215_000 + index as u64,
        "artists": [{ "name": "Daft Punk", "id": "a1" }, { "name": "Romanthony", "id": "a2" }],
        "album": { "name": "Discovery", "release_date": "2001-03-12", "total_tracks": 14 },
        "popularity": 80
    })
}

pub fn raw_artist(index: usize) -> Value {
    json!({
        "id": format!("artist{index}"),
        "name": format!("Artist {index}"),
        "genres": ["french house", "electro"],
        "followers": { "href": null, "total": 1000 * index as u64 },
        "popularity": 70
    })
}

pub fn raw_album(index: usize) -> Value {
    json!({
        "id": format!("album{index}"),
        "name": format!("Album {index}"),
        "album_type": "album",
        "release_date": "1997-01-20",
        "total_tracks": 16,
        "artists": [{ "name": "Daft Punk", "id": "a1" }]
    })
}

pub fn page(items: Vec<Value>) -> Value {
    json!({ "items": items, "limit": 50, "offset": 0, "next": null })
}

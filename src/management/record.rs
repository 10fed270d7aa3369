use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    Res,
    types::{CredentialRecord, Credentials},
};

/// Restores credentials from the record at `path`.
///
/// The record must be a sequence of exactly four fields. A missing or
/// unreadable file, a different shape or a field of the wrong type all mean
/// "no prior credentials" and yield `None`.
pub fn load_record(path: &Path) -> Option<Credentials> {
    let content = fs::read_to_string(path).ok()?;
    let value: Value = serde_json::from_str(&content).ok()?;
    if !matches!(&value, Value::Array(fields) if fields.len() == 4) {
        return None;
    }

    let (authorization_code, access_token, refresh_token, expires): CredentialRecord =
        serde_json::from_value(value).ok()?;
    Some(Credentials {
        authorization_code,
        access_token,
        refresh_token,
        access_token_expires: DateTime::<Utc>::from_timestamp(expires, 0)?,
    })
}

/// Writes `credentials` to `path`, creating parent directories as needed.
pub fn save_record(path: &Path, credentials: &Credentials) -> Res<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let record: CredentialRecord = (
        credentials.authorization_code.clone(),
        credentials.access_token.clone(),
        credentials.refresh_token.clone(),
        credentials.access_token_expires.timestamp(),
    );
    let json = serde_json::to_string(&record)?;
    fs::write(path, json)?;
    Ok(())
}

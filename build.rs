//! Build script for spotq.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory so it sits next to the `.env` file spotq reads:
//! - Linux: `~/.local/share/spotq/.env.example`
//! - macOS: `~/Library/Application Support/spotq/.env.example`
//! - Windows: `%LOCALAPPDATA%/spotq/.env.example`
//!
//! Any failure only emits a cargo warning; the template is a convenience and
//! must never break the build.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=.env.example");

    if let Err(e) = copy_env_example() {
        println!("cargo:warning=could not install .env.example: {}", e);
    }
}

fn copy_env_example() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");
    if !env_example_path.is_file() {
        return Err(format!("not found at {}", env_example_path.display()).into());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotq");
    fs::create_dir_all(&out_dir)?;

    let contents = fs::read_to_string(&env_example_path)?;
    fs::write(out_dir.join(".env.example"), contents)?;
    Ok(())
}

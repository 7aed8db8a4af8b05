//! Build script for the album shelf CLI.
//!
//! Copies the configuration template into the user's local data directory so
//! that a freshly installed binary finds a ready-to-edit example next to the
//! place where it expects its `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the local data directory.
///
/// The template ends up in the platform-specific data directory:
/// - Linux: `~/.local/share/shelfcli/.env.example`
/// - macOS: `~/Library/Application Support/shelfcli/.env.example`
/// - Windows: `%LOCALAPPDATA%/shelfcli/.env.example`
///
/// A missing template only produces a cargo warning; directory creation or
/// copy failures abort the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=env.example");

    // source template sits next to Cargo.toml
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("shelfcli");
    fs::create_dir_all(&out_dir)?;

    // a missing template downgrades to a warning, the build still succeeds
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}

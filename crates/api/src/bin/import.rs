//! Load episode and character reference data into the database.
//!
//! ```text
//! rickmorty-import <episodes.json> <characters.json>
//! ```
//!
//! Each file holds a JSON array of records in the public Rick and Morty API
//! shape. Episodes are loaded first so character links can resolve.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use rickmorty_api::logging::{self, LogFormat};
use rickmorty_core::import::{RawCharacter, RawEpisode};
use serde::de::DeserializeOwned;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init(LogFormat::from_env());

    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    let [episodes_path, characters_path] = args.as_slice() else {
        bail!("usage: rickmorty-import <episodes.json> <characters.json>");
    };

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://rickmorty.db".into());
    let pool = rickmorty_db::create_pool(&database_url)
        .await
        .with_context(|| format!("failed to open database {database_url}"))?;
    rickmorty_db::run_migrations(&pool)
        .await
        .context("failed to run database migrations")?;

    let episodes: Vec<RawEpisode> = read_records(episodes_path)?;
    let episode_summary = rickmorty_db::import::import_episodes(&pool, episodes)
        .await
        .context("episode import failed")?;

    let characters: Vec<RawCharacter> = read_records(characters_path)?;
    let character_summary = rickmorty_db::import::import_characters(&pool, characters)
        .await
        .context("character import failed")?;

    tracing::info!(
        episodes = episode_summary.imported,
        episodes_skipped = episode_summary.skipped,
        characters = character_summary.imported,
        characters_skipped = character_summary.skipped,
        appearances = character_summary.appearances,
        appearances_skipped = character_summary.appearances_skipped,
        "Import complete"
    );

    pool.close().await;
    Ok(())
}

fn read_records<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

//! Bulk import of episodes, characters and their appearance links.
//!
//! Each run happens inside one transaction. Rows are upserted by id so a
//! re-run refreshes the data instead of duplicating it. A record that fails
//! to parse or to insert is logged and skipped; it never aborts the run.

use rickmorty_core::import::{ParsedCharacter, ParsedEpisode, RawCharacter, RawEpisode};
use serde::Serialize;

use crate::models::character::CreateCharacter;
use crate::models::episode::CreateEpisode;
use crate::repositories::{AppearanceRepo, CharacterRepo, EpisodeRepo};
use crate::DbPool;

/// Outcome counters for one import pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Records written (inserted or refreshed).
    pub imported: usize,
    /// Records dropped because they were malformed or rejected by the database.
    pub skipped: usize,
    /// Appearance links created (characters only).
    pub appearances: usize,
    /// Appearance links dropped because the episode does not exist.
    pub appearances_skipped: usize,
}

/// Import a batch of episode records.
pub async fn import_episodes(
    pool: &DbPool,
    records: Vec<RawEpisode>,
) -> Result<ImportSummary, sqlx::Error> {
    let mut summary = ImportSummary::default();
    let mut tx = pool.begin().await?;

    for raw in records {
        let source_id = raw.id;
        let parsed = match ParsedEpisode::try_from(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(episode_id = source_id, error = %e, "Skipping malformed episode");
                summary.skipped += 1;
                continue;
            }
        };

        let input = CreateEpisode {
            id: parsed.id,
            title: parsed.title,
            air_date: parsed.air_date,
            episode_number: parsed.episode_number,
            season_number: parsed.season_number,
        };
        match EpisodeRepo::upsert(&mut *tx, &input).await {
            Ok(_) => summary.imported += 1,
            Err(e) => {
                tracing::warn!(episode_id = source_id, error = %e, "Skipping episode rejected by database");
                summary.skipped += 1;
            }
        }
    }

    tx.commit().await?;
    tracing::info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "Episode import finished"
    );
    Ok(summary)
}

/// Import a batch of character records and link each to its episodes.
///
/// Episodes should be imported first; links to unknown episodes are skipped.
pub async fn import_characters(
    pool: &DbPool,
    records: Vec<RawCharacter>,
) -> Result<ImportSummary, sqlx::Error> {
    let mut summary = ImportSummary::default();
    let mut tx = pool.begin().await?;

    for raw in records {
        let source_id = raw.id;
        let parsed = match ParsedCharacter::try_from(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(character_id = source_id, error = %e, "Skipping malformed character");
                summary.skipped += 1;
                continue;
            }
        };

        let input = CreateCharacter {
            id: parsed.id,
            name: parsed.name,
            status: parsed.status,
            species: parsed.species,
            character_type: parsed.character_type,
            gender: parsed.gender,
        };
        if let Err(e) = CharacterRepo::upsert(&mut *tx, &input).await {
            tracing::warn!(character_id = source_id, error = %e, "Skipping character rejected by database");
            summary.skipped += 1;
            continue;
        }
        summary.imported += 1;

        for episode_id in parsed.episode_ids {
            match AppearanceRepo::link(&mut *tx, episode_id, parsed.id).await {
                Ok(true) => summary.appearances += 1,
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(
                        character_id = parsed.id,
                        episode_id,
                        error = %e,
                        "Skipping appearance link"
                    );
                    summary.appearances_skipped += 1;
                }
            }
        }
    }

    tx.commit().await?;
    tracing::info!(
        imported = summary.imported,
        skipped = summary.skipped,
        appearances = summary.appearances,
        appearances_skipped = summary.appearances_skipped,
        "Character import finished"
    );
    Ok(summary)
}

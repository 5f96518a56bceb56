//! Integration tests for the bulk reference-data import.

use rickmorty_core::character::CharacterStatus;
use rickmorty_core::import::{RawCharacter, RawEpisode};
use rickmorty_db::import::{import_characters, import_episodes, ImportSummary};
use rickmorty_db::repositories::{AppearanceRepo, CharacterRepo, EpisodeRepo};
use sqlx::SqlitePool;

fn episodes_json() -> Vec<RawEpisode> {
    serde_json::from_str(
        r#"[
            {"id": 1, "name": "Pilot", "air_date": "December 2, 2013", "episode": "S01E01"},
            {"id": 2, "name": "Lawnmower Dog", "air_date": "December 9, 2013", "episode": "S01E02"},
            {"id": 3, "name": "Broken", "air_date": "not a date", "episode": "S01E03"}
        ]"#,
    )
    .unwrap()
}

fn characters_json() -> Vec<RawCharacter> {
    serde_json::from_str(
        r#"[
            {"id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human",
             "type": "", "gender": "Male", "episode": [1, 2]},
            {"id": 2, "name": "Snuffles", "status": "Alive", "species": "Animal",
             "type": "Dog", "gender": "Male", "episode": [2, 3]},
            {"id": 3, "name": "Mystery", "status": "Schrodinger", "species": "?",
             "type": "", "gender": "unknown", "episode": [1]}
        ]"#,
    )
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_malformed_rows_are_skipped(pool: SqlitePool) {
    let summary = import_episodes(&pool, episodes_json()).await.unwrap();
    assert_eq!(
        summary,
        ImportSummary {
            imported: 2,
            skipped: 1,
            ..Default::default()
        }
    );

    let summary = import_characters(&pool, characters_json()).await.unwrap();
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 1, "unknown status must be skipped");
    assert_eq!(summary.appearances, 3);
    assert_eq!(summary.appearances_skipped, 1, "episode 3 was never imported");

    let pilot = EpisodeRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(pilot.season_number, 1);
    assert_eq!(pilot.episode_number, 1);

    let snuffles = CharacterRepo::find_by_id(&pool, 2).await.unwrap().unwrap();
    assert_eq!(snuffles.character_type, "Dog");
    assert_eq!(snuffles.status, CharacterStatus::Alive);

    assert!(CharacterRepo::find_by_id(&pool, 3).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reimport_is_idempotent(pool: SqlitePool) {
    import_episodes(&pool, episodes_json()).await.unwrap();
    import_characters(&pool, characters_json()).await.unwrap();

    import_episodes(&pool, episodes_json()).await.unwrap();
    let second = import_characters(&pool, characters_json()).await.unwrap();

    assert_eq!(second.appearances, 0, "existing links are not recreated");
    assert_eq!(AppearanceRepo::list(&pool).await.unwrap().len(), 3);
}

use chrono::{DateTime, Utc};
use common_services::database::global_record::GlobalRecord;

pub const TEST_DATABASE_NAME: &str = "corpus_search_test";
pub const UPLOADER_ID: i64 = 42;
pub const ENGLISH: i32 = 1;
pub const FRENCH: i32 = 2;

fn record(id: i64, source_text: &str, target_text: &str) -> GlobalRecord {
    GlobalRecord {
        id,
        source_language_id: ENGLISH,
        target_language_id: FRENCH,
        source_text: source_text.to_owned(),
        target_text: target_text.to_owned(),
        uploaded_by: Some(UPLOADER_ID),
        created_at: DateTime::<Utc>::from_timestamp(1_735_689_600 + id, 0).unwrap_or_default(),
    }
}

/// Records the seeded store starts with. Inserted out of id order on purpose.
pub fn seed_records() -> Vec<GlobalRecord> {
    vec![
        record(3, "Fresh APPLE juice", "jus de pomme frais"),
        record(1, "apple pie", "tarte aux pommes"),
        record(2, "banana", "banane"),
        record(5, "snake_case names", "noms en snake case"),
        record(4, "100% cotton", "100% coton"),
    ]
}

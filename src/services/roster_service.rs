use crate::{database::MongoDB, models::ScoreRecord};
use mongodb::bson::{doc, oid::ObjectId};

/// Roster queries are capped; anything past the top 200 is out of view
pub const ROSTER_LIMIT: i64 = 200;

// Load the top records ordered by score descending
pub async fn load_roster(db: &MongoDB) -> Result<Vec<ScoreRecord>, String> {
    let collection = db.collection::<ScoreRecord>("users");

    let options = mongodb::options::FindOptions::builder()
        .sort(doc! { "score": -1 })
        .limit(ROSTER_LIMIT)
        .build();

    let mut cursor = collection
        .find(doc! {})
        .with_options(options)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut records = Vec::new();
    use futures::stream::StreamExt;

    while let Some(result) = cursor.next().await {
        match result {
            Ok(record) => records.push(record),
            Err(e) => log::error!("Error reading user record: {}", e),
        }
    }

    log::info!("📊 Loaded {} user records", records.len());

    Ok(records)
}

/// Case-insensitive substring filter over the cached roster.
/// An empty query returns the full cached set unchanged.
pub fn filter_roster(records: &[ScoreRecord], query: &str) -> Vec<ScoreRecord> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| {
            let name = r.name.as_deref().unwrap_or("").to_lowercase();
            let email = r.email.as_deref().unwrap_or("").to_lowercase();
            name.contains(&q) || email.contains(&q)
        })
        .cloned()
        .collect()
}

/// A score must be a finite, non-negative number
pub fn validate_score(score: f64) -> Result<(), String> {
    if !score.is_finite() || score < 0.0 {
        return Err("Invalid score".to_string());
    }
    Ok(())
}

// Overwrite a record's score and stamp the edit time
pub async fn update_score(db: &MongoDB, record_id: &str, new_score: f64) -> Result<(), String> {
    validate_score(new_score)?;

    let oid = ObjectId::parse_str(record_id)
        .map_err(|_| format!("Invalid record id: {}", record_id))?;

    let collection = db.collection::<ScoreRecord>("users");

    let update = doc! {
        "$set": {
            "score": new_score,
            "last_updated": chrono::Utc::now().timestamp_millis(),
        }
    };

    let result = collection
        .update_one(doc! { "_id": oid }, update)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if result.matched_count == 0 {
        return Err(format!("User {} not found", record_id));
    }

    log::info!("✅ Score updated: {} -> {}", record_id, new_score);

    Ok(())
}

// Remove a record's document from the store
pub async fn delete_record(db: &MongoDB, record_id: &str) -> Result<(), String> {
    let oid = ObjectId::parse_str(record_id)
        .map_err(|_| format!("Invalid record id: {}", record_id))?;

    let collection = db.collection::<ScoreRecord>("users");

    let result = collection
        .delete_one(doc! { "_id": oid })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    if result.deleted_count == 0 {
        return Err(format!("User {} not found", record_id));
    }

    log::info!("🗑️ User deleted: {}", record_id);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, email: Option<&str>, score: f64) -> ScoreRecord {
        ScoreRecord {
            id: None,
            name: name.map(String::from),
            email: email.map(String::from),
            score,
            rank: None,
            last_updated: None,
        }
    }

    fn sample_roster() -> Vec<ScoreRecord> {
        vec![
            record(Some("Alice"), Some("alice@example.com"), 120.0),
            record(Some("Bob"), Some("bob@test.org"), 90.0),
            record(None, Some("carol@example.com"), 45.0),
            record(Some("Dave"), None, 10.0),
        ]
    }

    #[test]
    fn test_empty_query_returns_full_set_in_order() {
        let roster = sample_roster();
        let filtered = filter_roster(&roster, "");
        assert_eq!(filtered.len(), 4);
        assert_eq!(filtered[0].name.as_deref(), Some("Alice"));
        assert_eq!(filtered[3].name.as_deref(), Some("Dave"));
    }

    #[test]
    fn test_filter_matches_name_case_insensitively() {
        let roster = sample_roster();
        let filtered = filter_roster(&roster, "ALICE");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn test_filter_matches_email_substring() {
        let roster = sample_roster();
        let filtered = filter_roster(&roster, "example.com");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_skips_records_missing_both_fields() {
        let roster = vec![record(None, None, 5.0)];
        assert!(filter_roster(&roster, "anything").is_empty());
    }

    #[test]
    fn test_filter_trims_whitespace() {
        let roster = sample_roster();
        let filtered = filter_roster(&roster, "  bob  ");
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_validate_score_rejects_negative_and_non_finite() {
        assert!(validate_score(-1.0).is_err());
        assert!(validate_score(f64::NAN).is_err());
        assert!(validate_score(f64::INFINITY).is_err());
        assert!(validate_score(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_score_accepts_zero_and_positive() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(42.5).is_ok());
    }
}

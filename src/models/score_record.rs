use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One leaderboard entry (stored in the `users` collection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: Option<String>,

    pub email: Option<String>,

    /// Current score; records written by older clients may omit the field
    #[serde(default)]
    pub score: f64,

    pub rank: Option<i64>,

    /// Unix timestamp in milliseconds, set on every score edit
    pub last_updated: Option<i64>,
}

impl ScoreRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("—")
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("—")
    }

    /// Hex form of the document key, used to address the record from the console
    pub fn key(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_score_defaults_to_zero_when_absent() {
        let document = doc! {
            "_id": ObjectId::new(),
            "name": "Alice",
            "email": "alice@example.com",
        };

        let record: ScoreRecord = mongodb::bson::from_document(document).unwrap();
        assert_eq!(record.score, 0.0);
        assert!(record.rank.is_none());
        assert!(record.last_updated.is_none());
    }

    #[test]
    fn test_missing_name_and_email_render_as_dash() {
        let record = ScoreRecord {
            id: None,
            name: None,
            email: None,
            score: 10.0,
            rank: None,
            last_updated: None,
        };
        assert_eq!(record.display_name(), "—");
        assert_eq!(record.display_email(), "—");
        assert_eq!(record.key(), "");
    }
}

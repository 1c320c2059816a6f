use serde::{Deserialize, Serialize};

/// Fixed document key of the allow-list inside the `admins` collection
pub const ADMIN_LIST_DOC_ID: &str = "admin_emails";

/// The single allow-list document enumerating authorized admin emails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminList {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub emails: Vec<String>,
}

impl AdminList {
    pub fn new(emails: Vec<String>) -> Self {
        Self {
            id: ADMIN_LIST_DOC_ID.to_string(),
            emails,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_emails_default_to_empty_when_field_absent() {
        let document = doc! { "_id": ADMIN_LIST_DOC_ID };

        let list: AdminList = mongodb::bson::from_document(document).unwrap();
        assert_eq!(list.id, "admin_emails");
        assert!(list.emails.is_empty());
    }

    #[test]
    fn test_new_carries_fixed_document_key() {
        let list = AdminList::new(vec!["a@x.com".to_string()]);
        assert_eq!(list.id, ADMIN_LIST_DOC_ID);
        assert_eq!(list.emails, vec!["a@x.com".to_string()]);
    }
}

use crate::{
    database::MongoDB,
    models::{AdminList, ADMIN_LIST_DOC_ID},
};
use mongodb::bson::doc;

// Load the allow-list; an absent document reads as an empty list
pub async fn load_admin_emails(db: &MongoDB) -> Result<Vec<String>, String> {
    let collection = db.collection::<AdminList>("admins");

    let list = collection
        .find_one(doc! { "_id": ADMIN_LIST_DOC_ID })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    match list {
        Some(list) => Ok(list.emails),
        None => {
            log::warn!(
                "⚠️ Allow-list document missing. Create it in the 'admins' collection: \
                 document '{}', field 'emails' (array of email strings).",
                ADMIN_LIST_DOC_ID
            );
            Ok(Vec::new())
        }
    }
}

/// Membership test driving the admin/non-admin split
pub fn is_authorized(emails: &[String], email: &str) -> bool {
    emails.iter().any(|e| e == email)
}

// Persist the entire allow-list by full overwrite of the document
pub async fn save_admin_emails(db: &MongoDB, emails: Vec<String>) -> Result<(), String> {
    let collection = db.collection::<AdminList>("admins");

    let options = mongodb::options::ReplaceOptions::builder()
        .upsert(true)
        .build();

    collection
        .replace_one(doc! { "_id": ADMIN_LIST_DOC_ID }, AdminList::new(emails))
        .with_options(options)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    log::info!("✅ Allow-list saved");

    Ok(())
}

/// Normalize and check the minimal `local@domain.tld` shape.
/// Returns the trimmed, lowercased email on success.
pub fn validate_email(raw: &str) -> Result<String, String> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err("Enter an email.".to_string());
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(head, tail)| !head.is_empty() && !tail.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    };

    if !valid {
        return Err("Enter a valid email.".to_string());
    }

    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorized_iff_member_of_list() {
        let emails = vec!["a@x.com".to_string(), "b@y.org".to_string()];
        assert!(is_authorized(&emails, "a@x.com"));
        assert!(is_authorized(&emails, "b@y.org"));
        assert!(!is_authorized(&emails, "c@z.net"));
        assert!(!is_authorized(&[], "a@x.com"));
    }

    #[test]
    fn test_validate_email_normalizes() {
        assert_eq!(validate_email("  Admin@Example.COM "), Ok("admin@example.com".to_string()));
    }

    #[test]
    fn test_validate_email_rejects_empty() {
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
    }

    #[test]
    fn test_validate_email_rejects_missing_at() {
        assert!(validate_email("adminexample.com").is_err());
    }

    #[test]
    fn test_validate_email_rejects_missing_domain_dot() {
        assert!(validate_email("admin@example").is_err());
        assert!(validate_email("admin@example.").is_err());
        assert!(validate_email("admin@.com").is_err());
    }

    #[test]
    fn test_validate_email_rejects_double_at() {
        assert!(validate_email("admin@extra@example.com").is_err());
        assert!(validate_email("@example.com").is_err());
    }
}

use crate::config::AppConfig;
use crate::database::MongoDB;
use crate::models::{AdminList, ADMIN_LIST_DOC_ID};
use crate::services::admin_service;
use mongodb::bson::doc;

/// Seed the allow-list document when it does not exist yet.
/// Only writes when a valid `ADMIN_BOOTSTRAP_EMAIL` is configured; otherwise
/// logs a hint describing the document to create. Never fatal.
pub async fn seed_admin_list(db: &MongoDB, config: &AppConfig) {
    let collection = db.collection::<AdminList>("admins");

    let existing = collection
        .find_one(doc! { "_id": ADMIN_LIST_DOC_ID })
        .await
        .unwrap_or(None);

    if existing.is_some() {
        return;
    }

    let Some(raw) = config.bootstrap_admin_email.as_deref() else {
        log::info!(
            "📋 No allow-list document found. Set ADMIN_BOOTSTRAP_EMAIL to seed one, \
             or create document '{}' in the 'admins' collection by hand.",
            ADMIN_LIST_DOC_ID
        );
        return;
    };

    let email = match admin_service::validate_email(raw) {
        Ok(email) => email,
        Err(e) => {
            log::warn!("⚠️ ADMIN_BOOTSTRAP_EMAIL rejected: {}", e);
            return;
        }
    };

    log::info!("📋 Seeding allow-list with bootstrap admin: {}", email);

    match collection.insert_one(AdminList::new(vec![email])).await {
        Ok(_) => log::info!("   ✅ Allow-list document created"),
        Err(e) => log::error!("   ❌ Failed to seed allow-list: {}", e),
    }
}

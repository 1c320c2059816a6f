use std::env;

/// Static configuration for the console, read once at startup.
/// Holds the MongoDB connection settings and the Google OAuth credentials.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongodb_uri: Option<String>,
    pub google_client_id: Option<String>,
    pub google_client_secret: Option<String>,
    pub google_redirect_uri: String,
    pub bootstrap_admin_email: Option<String>,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            mongodb_uri: env::var("MONGODB_URI").ok().filter(|v| !is_placeholder(v)),
            google_client_id: env::var("GOOGLE_CLIENT_ID").ok().filter(|v| !is_placeholder(v)),
            google_client_secret: env::var("GOOGLE_CLIENT_SECRET").ok().filter(|v| !is_placeholder(v)),
            google_redirect_uri: env::var("GOOGLE_REDIRECT_URI")
                .unwrap_or_else(|_| "http://localhost:8080/callback".to_string()),
            bootstrap_admin_email: env::var("ADMIN_BOOTSTRAP_EMAIL").ok(),
        }
    }

    /// The database integration counts as configured only when a usable URI is present.
    pub fn is_configured(&self) -> bool {
        self.mongodb_uri.is_some()
    }
}

// Treat unset-looking values from a copied .env template the same as unset
fn is_placeholder(value: &str) -> bool {
    value.trim().is_empty() || value == "REPLACE_ME"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_values_rejected() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("   "));
        assert!(is_placeholder("REPLACE_ME"));
        assert!(!is_placeholder("mongodb://localhost:27017/leaderboard"));
    }

    #[test]
    fn test_unconfigured_without_uri() {
        let config = AppConfig {
            mongodb_uri: None,
            google_client_id: Some("client-id".to_string()),
            google_client_secret: Some("client-secret".to_string()),
            google_redirect_uri: "http://localhost:8080/callback".to_string(),
            bootstrap_admin_email: None,
        };
        assert!(!config.is_configured());
    }
}

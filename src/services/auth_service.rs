use crate::config::AppConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of the signed-in operator for the current run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GoogleAuthUrl {
    pub auth_url: String,
    pub state: String,
}

// Generate Google OAuth consent URL
pub fn generate_google_oauth_url(config: &AppConfig) -> Result<GoogleAuthUrl, String> {
    let client_id = config
        .google_client_id
        .as_deref()
        .ok_or_else(|| "GOOGLE_CLIENT_ID not configured".to_string())?;

    let redirect_uri = config.google_redirect_uri.as_str();

    // State parameter for CSRF protection
    let state = Uuid::new_v4().to_string();

    let params = vec![
        ("client_id", client_id),
        ("redirect_uri", redirect_uri),
        ("response_type", "code"),
        ("scope", "openid email profile"),
        ("state", state.as_str()),
        ("access_type", "offline"),
        ("prompt", "select_account"),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let auth_url = format!("https://accounts.google.com/o/oauth2/v2/auth?{}", query_string);

    Ok(GoogleAuthUrl { auth_url, state })
}

// Exchange the pasted authorization code for a signed-in session
pub async fn exchange_code(config: &AppConfig, code: &str) -> Result<AuthSession, String> {
    let client_id = config
        .google_client_id
        .as_deref()
        .ok_or_else(|| "GOOGLE_CLIENT_ID not configured".to_string())?;
    let client_secret = config
        .google_client_secret
        .as_deref()
        .ok_or_else(|| "GOOGLE_CLIENT_SECRET not configured".to_string())?;
    let redirect_uri = config.google_redirect_uri.as_str();

    // Exchange code for tokens
    let client = reqwest::Client::new();
    let token_response = client
        .post("https://oauth2.googleapis.com/token")
        .form(&[
            ("code", code),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| format!("Failed to exchange code: {}", e))?;

    if !token_response.status().is_success() {
        return Err("Failed to exchange authorization code".to_string());
    }

    let tokens: serde_json::Value = token_response
        .json()
        .await
        .map_err(|e| format!("Failed to parse token response: {}", e))?;

    let access_token = tokens["access_token"]
        .as_str()
        .ok_or_else(|| "No access token in response".to_string())?;

    // Get user info
    let user_info_response = client
        .get("https://www.googleapis.com/oauth2/v2/userinfo")
        .header("Authorization", format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to get user info: {}", e))?;

    let user_info: serde_json::Value = user_info_response
        .json()
        .await
        .map_err(|e| format!("Failed to parse user info: {}", e))?;

    let email = user_info["email"]
        .as_str()
        .ok_or_else(|| "No email in user info".to_string())?;
    let name = user_info["name"].as_str().map(String::from);
    let picture = user_info["picture"].as_str().map(String::from);

    log::info!("✅ Sign-in successful: {}", email);

    Ok(AuthSession {
        email: email.to_string(),
        name,
        picture,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            mongodb_uri: Some("mongodb://localhost:27017/leaderboard".to_string()),
            google_client_id: Some("client-id-123".to_string()),
            google_client_secret: Some("client-secret-456".to_string()),
            google_redirect_uri: "http://localhost:8080/callback".to_string(),
            bootstrap_admin_email: None,
        }
    }

    #[test]
    fn test_oauth_url_carries_client_id_and_scopes() {
        let url = generate_google_oauth_url(&test_config()).unwrap();

        assert!(url.auth_url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.auth_url.contains("client_id=client-id-123"));
        assert!(url.auth_url.contains("scope=openid%20email%20profile"));
        assert!(url.auth_url.contains(&format!("state={}", url.state)));
    }

    #[test]
    fn test_oauth_url_requires_client_id() {
        let mut config = test_config();
        config.google_client_id = None;

        let result = generate_google_oauth_url(&config);
        assert!(result.is_err());
    }
}

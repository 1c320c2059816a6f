use crate::services::AuthSession;

/// The four mutually exclusive views of the console.
/// Transitions are driven only by sign-in/sign-out and the admin check.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Unconfigured,
    SignedOut,
    NotAdmin { email: String },
    Admin { email: String },
}

impl UiState {
    /// Single place where (configuration, session, authorization) maps to a view
    pub fn select(configured: bool, session: Option<&AuthSession>, is_admin: bool) -> Self {
        match (configured, session) {
            (false, _) => UiState::Unconfigured,
            (true, None) => UiState::SignedOut,
            (true, Some(s)) => {
                if is_admin {
                    UiState::Admin { email: s.email.clone() }
                } else {
                    UiState::NotAdmin { email: s.email.clone() }
                }
            }
        }
    }

    /// Render exactly one view for the current state
    pub fn render(&self) {
        match self {
            UiState::Unconfigured => {
                println!();
                println!("⚠️  MongoDB is not configured.");
                println!("    Set MONGODB_URI (see .env) and restart the console.");
                println!();
            }
            UiState::SignedOut => {
                println!();
                println!("Leaderboard Admin Console — signed out.");
                println!("Type 'signin' to authenticate with Google, or 'help' for commands.");
                println!();
            }
            UiState::NotAdmin { email } => {
                println!();
                println!("Access denied: {} is not on the admin allow-list.", email);
                println!("Type 'signout' to switch accounts.");
                println!();
            }
            UiState::Admin { email } => {
                println!();
                println!("Signed in as {} (admin).", email);
                println!("Type 'help' for commands.");
                println!();
            }
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            UiState::Admin { .. } => "admin> ",
            _ => "> ",
        }
    }
}

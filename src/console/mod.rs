pub mod commands;
pub mod state;

pub use commands::Command;
pub use state::UiState;

use std::io::{self, Write};

use crate::config::AppConfig;
use crate::database::MongoDB;
use crate::models::ScoreRecord;
use crate::services::{admin_service, auth_service, roster_service, AuthSession};
use crate::utils::AppError;

/// Owns every piece of mutable console state: the current view, the session,
/// and the per-session roster and allow-list caches.
pub struct AdminConsole {
    config: AppConfig,
    db: Option<MongoDB>,
    state: UiState,
    session: Option<AuthSession>,
    roster_cache: Vec<ScoreRecord>,
    admin_emails_cache: Vec<String>,
}

impl AdminConsole {
    pub fn new(config: AppConfig, db: Option<MongoDB>) -> Self {
        let state = if db.is_some() {
            UiState::SignedOut
        } else {
            UiState::Unconfigured
        };

        Self {
            config,
            db,
            state,
            session: None,
            roster_cache: Vec::new(),
            admin_emails_cache: Vec::new(),
        }
    }

    /// Read-parse-dispatch loop. Commands run strictly one at a time; every
    /// store call is awaited to completion before the next prompt appears.
    pub async fn run(&mut self) {
        self.state.render();

        loop {
            let Some(line) = read_line(self.state.prompt()) else {
                break;
            };

            let command = Command::parse(&line);
            if command == Command::Quit {
                break;
            }

            if let Err(e) = self.dispatch(command).await {
                println!("{}", e);
            }
        }

        println!("Bye.");
    }

    async fn dispatch(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Empty | Command::Quit => Ok(()),
            Command::Help => {
                commands::print_help();
                Ok(())
            }
            Command::Status => {
                self.state.render();
                Ok(())
            }
            Command::SignIn => self.handle_sign_in().await,
            Command::SignOut => {
                self.handle_sign_out();
                Ok(())
            }
            Command::Users => self.handle_load_users().await,
            Command::Search(query) => self.handle_search(&query),
            Command::Score(id) => self.handle_edit_score(&id).await,
            Command::Delete(id) => self.handle_delete(&id).await,
            Command::Admins => self.handle_load_admins().await,
            Command::AdminAdd(email) => self.handle_admin_add(&email).await,
            Command::AdminRemove(email) => self.handle_admin_remove(&email).await,
            Command::Unknown(line) => Err(AppError::InvalidInput(format!(
                "Unknown command: '{}'. Type 'help'.",
                line
            ))),
        }
    }

    // ------------------------------------------------------------------
    // Auth gate
    // ------------------------------------------------------------------

    async fn handle_sign_in(&mut self) -> Result<(), AppError> {
        let db = self.db.clone().ok_or(AppError::NotConfigured)?;

        if let Some(session) = &self.session {
            return Err(AppError::InvalidInput(format!(
                "Already signed in as {}. Type 'signout' first.",
                session.email
            )));
        }

        let auth_url = auth_service::generate_google_oauth_url(&self.config)
            .map_err(AppError::AuthFailed)?;

        println!();
        println!("Open this URL in a browser and authorize the console:");
        println!("  {}", auth_url.auth_url);
        println!();

        let Some(code) = read_line("Paste the authorization code (empty to cancel): ") else {
            return Err(AppError::AuthFailed("sign-in cancelled".to_string()));
        };
        if code.is_empty() {
            return Err(AppError::AuthFailed("sign-in cancelled".to_string()));
        }

        let session = auth_service::exchange_code(&self.config, &code)
            .await
            .map_err(AppError::AuthFailed)?;

        self.session = Some(session.clone());
        self.check_authorization(&db, &session).await;

        Ok(())
    }

    /// Authorization check: allow-list membership decides the view.
    /// Any read failure is treated as non-admin.
    async fn check_authorization(&mut self, db: &MongoDB, session: &AuthSession) {
        let emails = match admin_service::load_admin_emails(db).await {
            Ok(emails) => emails,
            Err(e) => {
                // Fail closed on read errors, logged at error level so an
                // outage stays distinguishable from a genuine denial
                log::error!("🔒 {}; treating operator as non-admin", AppError::AuthorizationRead(e));
                self.state = UiState::select(true, Some(session), false);
                self.state.render();
                return;
            }
        };

        let authorized = admin_service::is_authorized(&emails, &session.email);
        self.admin_emails_cache = emails;

        self.state = UiState::select(true, Some(session), authorized);
        self.state.render();

        if authorized {
            // Disjoint collections, loaded concurrently
            println!("Loading users and admin emails...");
            let (roster, admins) = tokio::join!(
                roster_service::load_roster(db),
                admin_service::load_admin_emails(db),
            );

            match roster {
                Ok(records) => {
                    self.roster_cache = records;
                    render_roster(&self.roster_cache);
                }
                Err(e) => println!("{}", AppError::DataRead(e)),
            }

            match admins {
                Ok(emails) => {
                    self.admin_emails_cache = emails;
                    render_admins(&self.admin_emails_cache);
                }
                Err(e) => println!("{}", AppError::DataRead(e)),
            }
        }
    }

    fn handle_sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("👋 Signed out: {}", session.email);
        }

        // Session caches do not outlive the session
        self.roster_cache.clear();
        self.admin_emails_cache.clear();

        self.state = UiState::select(self.db.is_some(), None, false);
        self.state.render();
    }

    // ------------------------------------------------------------------
    // User roster manager
    // ------------------------------------------------------------------

    fn require_admin(&self) -> Result<MongoDB, AppError> {
        match (&self.state, &self.db) {
            (UiState::Admin { .. }, Some(db)) => Ok(db.clone()),
            (UiState::Unconfigured, _) | (_, None) => Err(AppError::NotConfigured),
            _ => Err(AppError::InvalidInput(
                "That command needs an admin session. Type 'signin'.".to_string(),
            )),
        }
    }

    async fn handle_load_users(&mut self) -> Result<(), AppError> {
        let db = self.require_admin()?;

        println!("Loading users...");
        let records = roster_service::load_roster(&db)
            .await
            .map_err(AppError::DataRead)?;

        self.roster_cache = records;
        render_roster(&self.roster_cache);

        Ok(())
    }

    fn handle_search(&mut self, query: &str) -> Result<(), AppError> {
        self.require_admin()?;

        // Cache only; no new store query
        let filtered = roster_service::filter_roster(&self.roster_cache, query);
        render_roster(&filtered);

        Ok(())
    }

    async fn handle_edit_score(&mut self, id: &str) -> Result<(), AppError> {
        let db = self.require_admin()?;

        let record = self
            .roster_cache
            .iter()
            .find(|r| r.key() == id)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "No cached user with id {}. Run 'users' first.",
                    id
                ))
            })?;

        let prompt = format!(
            "Enter new score for {} ({}) [{}]: ",
            record.display_name(),
            record.display_email(),
            record.score
        );

        let Some(input) = read_line(&prompt) else {
            println!("Cancelled.");
            return Ok(());
        };
        if input.is_empty() {
            println!("Cancelled.");
            return Ok(());
        }

        let new_score: f64 = input
            .parse()
            .map_err(|_| AppError::InvalidInput("Invalid score".to_string()))?;
        roster_service::validate_score(new_score)
            .map_err(AppError::InvalidInput)?;

        roster_service::update_score(&db, id, new_score)
            .await
            .map_err(AppError::DataWrite)?;

        println!("Score updated.");
        self.handle_load_users().await
    }

    async fn handle_delete(&mut self, id: &str) -> Result<(), AppError> {
        let db = self.require_admin()?;

        let record = self
            .roster_cache
            .iter()
            .find(|r| r.key() == id)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "No cached user with id {}. Run 'users' first.",
                    id
                ))
            })?;

        let prompt = format!(
            "Delete user \"{}\" ({})? This removes their document permanently. [y/N] ",
            record.display_name(),
            record.display_email()
        );
        if !confirm(&prompt) {
            println!("Cancelled.");
            return Ok(());
        }

        roster_service::delete_record(&db, id)
            .await
            .map_err(AppError::DataWrite)?;

        println!("User deleted.");
        self.handle_load_users().await
    }

    // ------------------------------------------------------------------
    // Admin list manager
    // ------------------------------------------------------------------

    async fn handle_load_admins(&mut self) -> Result<(), AppError> {
        let db = self.require_admin()?;

        println!("Loading admin emails...");
        let emails = admin_service::load_admin_emails(&db)
            .await
            .map_err(AppError::DataRead)?;

        self.admin_emails_cache = emails;
        render_admins(&self.admin_emails_cache);

        Ok(())
    }

    async fn handle_admin_add(&mut self, raw: &str) -> Result<(), AppError> {
        let db = self.require_admin()?;

        let email = admin_service::validate_email(raw).map_err(AppError::InvalidInput)?;

        if admin_service::is_authorized(&self.admin_emails_cache, &email) {
            return Err(AppError::InvalidInput(
                "That email is already an admin.".to_string(),
            ));
        }

        let mut emails = self.admin_emails_cache.clone();
        emails.push(email);

        admin_service::save_admin_emails(&db, emails)
            .await
            .map_err(AppError::DataWrite)?;

        println!("Admin emails updated.");
        self.handle_load_admins().await
    }

    async fn handle_admin_remove(&mut self, email: &str) -> Result<(), AppError> {
        let db = self.require_admin()?;

        if !admin_service::is_authorized(&self.admin_emails_cache, email) {
            return Err(AppError::InvalidInput(format!(
                "{} is not in the admin list.",
                email
            )));
        }

        if !confirm(&format!("Remove \"{}\" from the admin list? [y/N] ", email)) {
            println!("Cancelled.");
            return Ok(());
        }

        let emails: Vec<String> = self
            .admin_emails_cache
            .iter()
            .filter(|e| e.as_str() != email)
            .cloned()
            .collect();

        admin_service::save_admin_emails(&db, emails)
            .await
            .map_err(AppError::DataWrite)?;

        println!("Admin emails updated.");
        self.handle_load_admins().await
    }
}

// ----------------------------------------------------------------------
// Terminal helpers
// ----------------------------------------------------------------------

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None, // EOF
        Ok(_) => Some(input.trim().to_string()),
        Err(_) => None,
    }
}

fn confirm(prompt: &str) -> bool {
    match read_line(prompt) {
        Some(answer) => {
            let answer = answer.to_lowercase();
            answer == "y" || answer == "yes"
        }
        None => false,
    }
}

fn render_roster(records: &[ScoreRecord]) {
    if records.is_empty() {
        println!("No users found.");
        return;
    }

    println!(
        "{:<20} {:<28} {:>8} {:>6}  {}",
        "NAME", "EMAIL", "SCORE", "RANK", "ID"
    );
    for record in records {
        let rank = record
            .rank
            .map(|r| r.to_string())
            .unwrap_or_default();
        println!(
            "{:<20} {:<28} {:>8} {:>6}  {}",
            record.display_name(),
            record.display_email(),
            record.score,
            rank,
            record.key()
        );
    }
    println!("{} user(s)", records.len());
}

fn render_admins(emails: &[String]) {
    if emails.is_empty() {
        println!("No admin emails configured.");
        return;
    }

    println!("ADMIN EMAILS");
    for email in emails {
        println!("  {}", email);
    }
    println!("{} admin(s)", emails.len());
}

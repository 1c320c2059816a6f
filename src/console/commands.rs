/// One operator action, parsed from a single input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SignIn,
    SignOut,
    Status,
    Users,
    Search(String),
    Score(String),
    Delete(String),
    Admins,
    AdminAdd(String),
    AdminRemove(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        let mut parts = line.split_whitespace();
        let keyword = parts.next().unwrap_or("").to_lowercase();
        let rest = parts.collect::<Vec<_>>().join(" ");

        match keyword.as_str() {
            "signin" | "login" => Command::SignIn,
            "signout" | "logout" => Command::SignOut,
            "status" | "whoami" => Command::Status,
            "users" | "refresh" => Command::Users,
            // A bare `search` clears the filter
            "search" => Command::Search(rest),
            "score" if !rest.is_empty() => Command::Score(rest),
            "delete" if !rest.is_empty() => Command::Delete(rest),
            "admins" => Command::Admins,
            "admin-add" if !rest.is_empty() => Command::AdminAdd(rest),
            "admin-remove" if !rest.is_empty() => Command::AdminRemove(rest),
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

pub fn print_help() {
    println!("Commands:");
    println!("  signin                   sign in with Google");
    println!("  signout                  drop the current session");
    println!("  status                   show the current view");
    println!("  users                    reload the top-200 roster from the store");
    println!("  search <text>            filter the cached roster by name or email");
    println!("  score <id>               edit a user's score (prompts for the value)");
    println!("  delete <id>              delete a user record (asks for confirmation)");
    println!("  admins                   reload and show the admin allow-list");
    println!("  admin-add <email>        add an email to the allow-list");
    println!("  admin-remove <email>     remove an email from the allow-list");
    println!("  help                     this text");
    println!("  quit                     exit the console");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords_and_aliases() {
        assert_eq!(Command::parse("signin"), Command::SignIn);
        assert_eq!(Command::parse("login"), Command::SignIn);
        assert_eq!(Command::parse("SIGNOUT"), Command::SignOut);
        assert_eq!(Command::parse("refresh"), Command::Users);
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn test_parse_search_keeps_argument_and_allows_bare_form() {
        assert_eq!(Command::parse("search alice"), Command::Search("alice".to_string()));
        assert_eq!(Command::parse("search"), Command::Search(String::new()));
    }

    #[test]
    fn test_parse_commands_requiring_arguments() {
        assert_eq!(Command::parse("score 0123abc"), Command::Score("0123abc".to_string()));
        assert_eq!(Command::parse("delete 0123abc"), Command::Delete("0123abc".to_string()));
        assert_eq!(
            Command::parse("admin-add a@x.com"),
            Command::AdminAdd("a@x.com".to_string())
        );
        // Missing argument falls through to Unknown
        assert_eq!(Command::parse("score"), Command::Unknown("score".to_string()));
        assert_eq!(Command::parse("delete"), Command::Unknown("delete".to_string()));
        assert_eq!(Command::parse("admin-remove"), Command::Unknown("admin-remove".to_string()));
    }

    #[test]
    fn test_parse_empty_and_unknown() {
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("frobnicate"), Command::Unknown("frobnicate".to_string()));
    }
}

//! Manga Panel CLI - session and favorites management.
//!
//! Drives the client layer against file-backed storage areas in the data
//! directory (`MP_DATA_DIR`, default `.manga-panel`): `session/` plays the
//! tab's volatile area and `local/` the durable area shared by every
//! invocation.
//!
//! # Usage
//!
//! ```bash
//! # Log in (no password: the front end has no credential check)
//! mp-cli login -e reader@example.com -n "Ann Lee"
//!
//! # Manage the current reader's favorites
//! mp-cli favorites add one-piece
//! mp-cli favorites toggle berserk
//! mp-cli favorites list
//! mp-cli favorites clear
//!
//! # Home page sections
//! mp-cli catalog latest -n 5
//!
//! # End the session
//! mp-cli logout
//! ```
//!
//! # Commands
//!
//! - `login` / `logout` / `whoami` - Session identity
//! - `favorites` - Favorites of the current reader (or the anonymous set)
//! - `catalog` - Home page sections of the catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{CliError, Context};

#[derive(Parser)]
#[command(name = "mp-cli")]
#[command(author, version, about = "Manga Panel CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a session
    Login {
        /// Reader email address
        #[arg(short, long)]
        email: String,

        /// Reader display name
        #[arg(short, long, default_value = "")]
        name: String,
    },
    /// End the current session
    Logout,
    /// Show the current reader's profile
    Whoami,
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Browse the catalog
    Catalog {
        #[command(subcommand)]
        section: CatalogSection,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorite manga
    List,
    /// Add a manga to favorites
    Add {
        /// Catalog ID
        id: String,
    },
    /// Remove a manga from favorites
    Remove {
        /// Catalog ID
        id: String,
    },
    /// Add the manga if absent, remove it if present
    Toggle {
        /// Catalog ID
        id: String,
    },
    /// Remove every favorite
    Clear,
}

#[derive(Subcommand)]
enum CatalogSection {
    /// Latest chapters (head of the catalog)
    Latest {
        /// Number of entries
        #[arg(short, default_value_t = 5)]
        n: usize,
    },
    /// Popular manga (tail of the catalog)
    Popular {
        /// Number of entries
        #[arg(short, default_value_t = 5)]
        n: usize,
    },
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "manga_panel_cli=info,manga_panel_client=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = Context::from_env()?;

    match cli.command {
        Commands::Login { email, name } => commands::session::login(&ctx, &email, &name)?,
        Commands::Logout => commands::session::logout(&ctx),
        Commands::Whoami => commands::session::whoami(&ctx),
        Commands::Favorites { action } => match action {
            FavoritesAction::List => commands::favorites::list(&ctx),
            FavoritesAction::Add { id } => commands::favorites::add(&ctx, &id),
            FavoritesAction::Remove { id } => commands::favorites::remove(&ctx, &id),
            FavoritesAction::Toggle { id } => commands::favorites::toggle(&ctx, &id),
            FavoritesAction::Clear => commands::favorites::clear(&ctx),
        },
        Commands::Catalog { section } => match section {
            CatalogSection::Latest { n } => commands::catalog::latest(&ctx, n),
            CatalogSection::Popular { n } => commands::catalog::popular(&ctx, n),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_favorites_add() {
        let cli = Cli::try_parse_from(["mp-cli", "favorites", "add", "one-piece"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Favorites {
                action: FavoritesAction::Add { id }
            }) if id == "one-piece"
        ));
    }

    #[test]
    fn test_parse_catalog_default_count() {
        let cli = Cli::try_parse_from(["mp-cli", "catalog", "popular"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Catalog {
                section: CatalogSection::Popular { n: 5 }
            })
        ));
    }

    #[test]
    fn test_login_requires_email() {
        assert!(Cli::try_parse_from(["mp-cli", "login", "-n", "Ann"]).is_err());
    }
}

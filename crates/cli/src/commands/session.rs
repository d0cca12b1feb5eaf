//! Session commands.
//!
//! # Usage
//!
//! ```bash
//! mp-cli login -e reader@example.com -n "Ann Lee"
//! mp-cli whoami
//! mp-cli logout
//! ```

use manga_panel_client::ProfileSummary;

use super::{CliError, Context};

/// Log in as `email`.
///
/// # Errors
///
/// Returns [`CliError::InvalidEmail`] if `email` is not a valid address.
pub fn login(ctx: &Context, email: &str, name: &str) -> Result<(), CliError> {
    let identity = ctx.session.login(email, name)?;
    tracing::info!(
        favorites = ctx.favorites.read_favorite_ids().len(),
        "Session started for {}",
        identity.email
    );
    Ok(())
}

/// End the current session.
pub fn logout(ctx: &Context) {
    if !ctx.session.is_logged_in() {
        tracing::info!("No active session");
    }
    ctx.session.logout();
}

/// Print the current reader's profile.
#[allow(clippy::print_stdout)]
pub fn whoami(ctx: &Context) {
    for line in render_profile(ctx.session.profile().as_ref()) {
        println!("{line}");
    }
}

/// Profile lines, or the logged-out notice.
pub fn render_profile(profile: Option<&ProfileSummary>) -> Vec<String> {
    let Some(profile) = profile else {
        return vec!["Not logged in. Use `mp-cli login` to access your profile.".to_string()];
    };

    let initials = if profile.initials.is_empty() {
        "U"
    } else {
        profile.initials.as_str()
    };

    vec![
        format!("[{initials}] {}", profile.name),
        format!("Email:     {}", profile.email),
        format!("Favorites: {}", profile.favorites_count),
    ]
}

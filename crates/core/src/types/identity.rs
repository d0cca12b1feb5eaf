//! Session identity types.

use serde::{Deserialize, Serialize};

use crate::Email;

/// The logged-in reader of the current tab.
///
/// Minimal data kept in the tab's volatile storage to identify the user and
/// greet them by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User's email address. Favorites are namespaced by it.
    pub email: Email,
    /// Display name. Records written without one decode with an empty name.
    #[serde(default)]
    pub name: String,
}

impl Identity {
    /// Create a new identity.
    #[must_use]
    pub fn new(email: Email, name: impl Into<String>) -> Self {
        Self {
            email,
            name: name.into(),
        }
    }

    /// Avatar initials: the upper-cased first letter of the first two words
    /// of the display name.
    ///
    /// ```
    /// # use manga_panel_core::{Email, Identity};
    /// let email = Email::parse("a@x.com").unwrap();
    /// assert_eq!(Identity::new(email.clone(), "monkey d luffy").initials(), "MD");
    /// assert_eq!(Identity::new(email, "").initials(), "");
    /// ```
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

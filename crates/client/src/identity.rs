//! Identity Store: the logged-in reader of the current tab.
//!
//! The identity lives in the volatile (tab-scoped) storage area as JSON under
//! the user key. Any object with a non-empty `email` string is a session; its
//! `name` may be missing. Anything else is treated as "no session".
//! [`decode_identity`] is the only place that policy is implemented.

use std::fmt;
use std::rc::Rc;

use manga_panel_core::Identity;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{StorageArea, StorageKeys};

/// Why a stored identity record was rejected.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The value is not JSON, or not an object with a non-empty `email`
    /// string.
    #[error("malformed identity record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a stored identity record.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] for invalid JSON, a missing or
/// non-string `email`, or an empty one. Address syntax is not checked here:
/// [`Email::parse`](manga_panel_core::Email::parse) only guards login.
pub fn decode_identity(raw: &str) -> Result<Identity, DecodeError> {
    Ok(serde_json::from_str(raw)?)
}

/// Reads and writes the session identity in the volatile storage area.
///
/// Cheap to clone; clones share the same area.
#[derive(Clone)]
pub struct IdentityStore {
    area: Rc<dyn StorageArea>,
    key: Rc<str>,
}

impl fmt::Debug for IdentityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl IdentityStore {
    /// Identity store over `area`, using the user key from `keys`.
    #[must_use]
    pub fn new(area: Rc<dyn StorageArea>, keys: &StorageKeys) -> Self {
        Self {
            area,
            key: Rc::from(keys.user.as_str()),
        }
    }

    /// The identity of the current session.
    ///
    /// Returns `None` when nobody is logged in, when the record is malformed,
    /// or when the volatile area cannot be read. Never fails.
    #[must_use]
    pub fn current_user(&self) -> Option<Identity> {
        let raw = match self.area.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key = %self.key, error = %err, "Failed to read identity");
                return None;
            }
        };

        match decode_identity(&raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                debug!(key = %self.key, error = %err, "Ignoring stored identity");
                None
            }
        }
    }

    /// Replace the session identity.
    ///
    /// Storage failures are logged and swallowed; the previous identity (if
    /// any) stays in place.
    pub fn set_current_user(&self, identity: &Identity) {
        let json = match serde_json::to_string(identity) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "Failed to encode identity");
                return;
            }
        };

        if let Err(err) = self.area.set_item(&self.key, &json) {
            warn!(key = %self.key, error = %err, "Failed to store identity");
        }
    }

    /// Remove the session identity (logout).
    pub fn clear_current_user(&self) {
        if let Err(err) = self.area.remove_item(&self.key) {
            warn!(key = %self.key, error = %err, "Failed to clear identity");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use manga_panel_core::Email;

    use super::*;
    use crate::MemoryStorage;

    fn store() -> (Rc<MemoryStorage>, IdentityStore) {
        let area = Rc::new(MemoryStorage::new());
        let identities = IdentityStore::new(area.clone(), &StorageKeys::default());
        (area, identities)
    }

    fn ann() -> Identity {
        Identity::new(Email::parse("ann@example.com").unwrap(), "Ann Lee")
    }

    #[test]
    fn test_decode_valid_record() {
        let identity = decode_identity(r#"{"email":"ann@example.com","name":"Ann Lee"}"#).unwrap();
        assert_eq!(identity, ann());
    }

    #[test]
    fn test_decode_rejects_bad_records() {
        for raw in [
            "",
            "null",
            "not json",
            "[]",
            r#"{"name":"Ann"}"#,
            r#"{"email":"","name":"Ann"}"#,
            r#"{"email":null,"name":"Ann"}"#,
            r#"{"email":7,"name":"Ann"}"#,
        ] {
            assert!(decode_identity(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_decode_accepts_any_non_empty_email() {
        let bob = decode_identity(r#"{"email":"bob","name":"Bob"}"#).unwrap();
        assert_eq!(bob.email.as_str(), "bob");
        assert_eq!(bob.name, "Bob");

        let nameless = decode_identity(r#"{"email":"ann@example.com"}"#).unwrap();
        assert_eq!(nameless.email.as_str(), "ann@example.com");
        assert_eq!(nameless.name, "");
    }

    #[test]
    fn test_absent_by_default() {
        let (_, identities) = store();
        assert_eq!(identities.current_user(), None);
    }

    #[test]
    fn test_set_then_get_then_clear() {
        let (area, identities) = store();
        identities.set_current_user(&ann());

        assert_eq!(identities.current_user(), Some(ann()));
        assert!(area.get_item("mp_user").unwrap().is_some());

        identities.clear_current_user();
        assert_eq!(identities.current_user(), None);
        assert!(area.is_empty());
    }

    #[test]
    fn test_malformed_record_is_absent() {
        let (area, identities) = store();
        area.set_item("mp_user", "{\"email\":").unwrap();
        assert_eq!(identities.current_user(), None);
    }

    #[test]
    fn test_unavailable_storage_is_absent_and_silent() {
        let (area, identities) = store();
        identities.set_current_user(&ann());

        area.set_available(false);
        assert_eq!(identities.current_user(), None);
        identities.clear_current_user();
        identities.set_current_user(&ann());

        area.set_available(true);
        assert_eq!(identities.current_user(), Some(ann()));
    }
}

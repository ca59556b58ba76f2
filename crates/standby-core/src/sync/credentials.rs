//! Source of the bearer token sent with status updates.

use std::sync::Mutex;

/// Where the sync client gets its bearer token.
pub trait CredentialStore: Send + Sync {
    /// The current token, if the user is signed in.
    fn token(&self) -> Option<String>;

    /// Forget the token after the server refused it.
    fn clear(&self) {}
}

/// Token held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct StaticCredentials {
    token: Mutex<Option<String>>,
}

impl StaticCredentials {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Mutex::new(token.filter(|t| !t.trim().is_empty())),
        }
    }
}

impl CredentialStore for StaticCredentials {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_counts_as_absent() {
        assert_eq!(StaticCredentials::new(Some("  ".to_string())).token(), None);
        assert_eq!(StaticCredentials::new(None).token(), None);
    }

    #[test]
    fn test_clear_forgets_token() {
        let store = StaticCredentials::new(Some("abc".to_string()));
        assert_eq!(store.token().as_deref(), Some("abc"));
        store.clear();
        assert_eq!(store.token(), None);
    }
}

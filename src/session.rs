// src/session.rs
//! Signed-in recruiter identity, shared by the screens through `AppContext`

use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user: Some(User { id: user_id.into() }),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Id of the signed-in user, `None` when nobody is signed in or the id is blank
    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.id.as_str())
            .filter(|id| !id.trim().is_empty())
    }

    pub fn log_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!("User {} logged out", user.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_out_clears_user() {
        let mut session = Session::signed_in("42");
        assert_eq!(session.user_id(), Some("42"));

        session.log_out();
        assert!(session.user().is_none());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_blank_id_counts_as_signed_out() {
        let session = Session::signed_in("  ");
        assert_eq!(session.user_id(), None);
    }
}

//! Shared session state for the default shell.
//!
//! A `Store<SessionState>` is created once at app start and passed down
//! through context; the login page is the only writer that establishes a
//! user and the navbar's logout control is the only teardown point.

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<UserDto>,
}

impl SessionState {
    /// Whether a signed-in user is present.
    pub fn is_present(&self) -> bool {
        self.user.is_some()
    }

    /// Establish the session for `user`, replacing any previous user.
    pub fn sign_in(&mut self, user: UserDto) {
        tracing::info!("session established for {}", user.username);
        self.user = Some(user);
    }

    /// Tear the session down.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("session ended for {}", user.username);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_user(id: i32, username: &str) -> UserDto {
        UserDto {
            id,
            username: username.to_string(),
        }
    }

    /// Tests that a freshly created session has no user.
    ///
    /// Expected: is_present() is false and no user is stored
    #[test]
    fn starts_absent() {
        let session = SessionState::default();

        assert!(!session.is_present());
        assert!(session.user.is_none());
    }

    /// Tests that signing in stores the user and makes the session present.
    ///
    /// Expected: is_present() is true and the stored user matches
    #[test]
    fn sign_in_establishes_user() {
        let mut session = SessionState::default();

        session.sign_in(mock_user(1, "corvid"));

        assert!(session.is_present());
        assert_eq!(session.user.as_ref().unwrap().username, "corvid");
    }

    /// Tests that signing in again replaces the previous user.
    ///
    /// Expected: the second user is stored, the first is gone
    #[test]
    fn sign_in_replaces_previous_user() {
        let mut session = SessionState::default();

        session.sign_in(mock_user(1, "corvid"));
        session.sign_in(mock_user(2, "heron"));

        let user = session.user.as_ref().unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.username, "heron");
    }

    /// Tests that signing out clears the session.
    ///
    /// Expected: is_present() is false after sign_out()
    #[test]
    fn sign_out_clears_session() {
        let mut session = SessionState::default();
        session.sign_in(mock_user(1, "corvid"));

        session.sign_out();

        assert!(!session.is_present());
        assert!(session.user.is_none());
    }

    /// Tests that signing out an absent session is a no-op.
    ///
    /// Expected: no panic, session stays absent
    #[test]
    fn sign_out_when_absent_is_noop() {
        let mut session = SessionState::default();

        session.sign_out();

        assert!(!session.is_present());
    }
}

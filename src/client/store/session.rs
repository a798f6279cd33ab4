//! Explicit session state.
//!
//! Page components read the logged-in user from this context value, which
//! `App` provides at construction time and fills from `/api/auth/user` on
//! first load. Nothing reads login flags out of browser-global storage.

use crate::model::user::{RoleDto, UserDto};

#[derive(Clone, Default, PartialEq)]
pub struct SessionState {
    /// The logged-in user, if any.
    pub user: Option<UserDto>,
    /// Whether the initial session fetch has completed; gates UI that
    /// would otherwise flash a logged-out state.
    pub fetched: bool,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.role == RoleDto::Admin)
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|user| user.id)
    }
}

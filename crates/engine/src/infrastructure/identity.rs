//! Identity adapters.

use async_trait::async_trait;
use threadwatch_domain::UserId;

use crate::infrastructure::ports::{IdentityError, IdentityPort};

/// Identity fixed at construction (for example from `THREADWATCH_USER`).
///
/// `None` behaves as "not signed in".
pub struct StaticIdentity {
    user: Option<UserId>,
}

impl StaticIdentity {
    pub fn new(user: Option<UserId>) -> Self {
        Self { user }
    }

    pub fn signed_in(login: impl Into<UserId>) -> Self {
        Self::new(Some(login.into()))
    }

    pub fn anonymous() -> Self {
        Self::new(None)
    }

    /// Reads the login from `var`, treating unset or blank values as signed out.
    pub fn from_env(var: &str) -> Self {
        let user = std::env::var(var)
            .ok()
            .map(|login| login.trim().to_string())
            .filter(|login| !login.is_empty())
            .map(UserId::from);
        Self::new(user)
    }
}

#[async_trait]
impl IdentityPort for StaticIdentity {
    async fn current_user(&self) -> Result<Option<UserId>, IdentityError> {
        Ok(self.user.clone())
    }
}

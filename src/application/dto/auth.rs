use crate::domain::tenant::UserId;
use serde::{Deserialize, Serialize};

/// Authenticated caller as vouched for by the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: Option<String>,
}

impl Session {
    pub fn new(user_id: UserId, email: Option<String>) -> Self {
        Self { user_id, email }
    }
}

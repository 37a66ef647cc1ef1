use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identifier issued by the backend.
///
/// The backend may hand out numeric ids or UUID strings; whichever form it
/// sends is echoed back unchanged in later requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

/// Authenticated user session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,

    /// Present after login; signup does not issue a token
    pub access_token: Option<String>,

    pub email: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self { user_id: user_id.into(), access_token: None, email: None }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

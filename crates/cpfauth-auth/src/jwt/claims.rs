//! JWT claims structure embedded in issued tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the directory username.
    pub sub: String,
    /// The CPF submitted by the caller.
    pub cpf: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Builds claims issued at `now` and valid for `ttl`.
    pub fn issue(
        username: impl Into<String>,
        cpf: impl Into<String>,
        now: DateTime<Utc>,
        ttl: chrono::Duration,
    ) -> Self {
        Self {
            sub: username.into(),
            cpf: cpf.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

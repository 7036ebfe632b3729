//! Request DTOs.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use cpfauth_core::error::AppError;
use cpfauth_core::result::AppResult;

/// Authentication request body.
///
/// The `cpf` key matches case-insensitively and the last occurrence wins.
/// A `null` value leaves the field as it was, so a missing or `null` `cpf`
/// decodes as empty. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthRequest {
    /// CPF to look up.
    pub cpf: String,
}

impl AuthRequest {
    /// Decodes a raw request body. A JSON `null` body is an empty request.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let parsed: Option<Self> = serde_json::from_slice(body)?;
        Ok(parsed.unwrap_or_default())
    }

    /// Returns the CPF, rejecting an empty one.
    pub fn require_cpf(&self) -> AppResult<&str> {
        if self.cpf.is_empty() {
            return Err(AppError::missing_cpf());
        }
        Ok(&self.cpf)
    }
}

impl<'de> Deserialize<'de> for AuthRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AuthRequestVisitor)
    }
}

struct AuthRequestVisitor;

impl<'de> Visitor<'de> for AuthRequestVisitor {
    type Value = AuthRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut request = AuthRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("cpf") {
                if let Some(cpf) = map.next_value::<Option<String>>()? {
                    request.cpf = cpf;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(request)
    }
}

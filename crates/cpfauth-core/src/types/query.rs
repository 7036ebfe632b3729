//! Directory search query.

/// An exact-match lookup against one user attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    /// Directory (user pool) identifier.
    pub pool_id: String,
    /// Attribute name to match.
    pub attribute: String,
    /// Value the attribute must equal.
    pub value: String,
    /// Maximum number of records returned.
    pub limit: i32,
}

impl UserQuery {
    /// Query for at most one user whose `attribute` equals `value`.
    pub fn exact(
        pool_id: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            pool_id: pool_id.into(),
            attribute: attribute.into(),
            value: value.into(),
            limit: 1,
        }
    }

    /// Cognito filter expression, e.g. `preferred_username = "123"`.
    ///
    /// Backslashes and double quotes in the value are escaped so the value
    /// stays a single string literal.
    pub fn filter_expression(&self) -> String {
        let mut escaped = String::with_capacity(self.value.len());
        for c in self.value.chars() {
            if c == '"' || c == '\\' {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        format!("{} = \"{}\"", self.attribute, escaped)
    }
}

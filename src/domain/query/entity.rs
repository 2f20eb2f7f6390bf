use serde::{Deserialize, Serialize};

use super::invariants::validate_query;
use crate::domain::DomainResult;

/// A validated raga search query.
///
/// Only constructible through `parse`, so holding one proves the text is
/// trimmed, non-empty and letters/whitespace only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RagaQuery(String);

impl RagaQuery {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        validate_query(raw).map(|trimmed| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for RagaQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RagaQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_trimmed_text() {
        let query = RagaQuery::parse("  Kalyani ").unwrap();
        assert_eq!(query.as_str(), "Kalyani");
        assert_eq!(query.to_string(), "Kalyani");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(RagaQuery::parse("").is_err());
        assert!(RagaQuery::parse("Kalyani-2").is_err());
    }
}

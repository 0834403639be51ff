use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

/// Keyset position in the audit trail: `(created_at, id)` of the last row served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogCursor {
    pub created_at: DateTime<Utc>,
    pub id: i64,
}

fn invalid() -> DomainError {
    DomainError::validation("invalid cursor token")
}

impl AuditLogCursor {
    pub fn new(created_at: DateTime<Utc>, id: i64) -> Self {
        Self { created_at, id }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.created_at.to_rfc3339(), self.id);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (created_at_s, id_s) = raw.split_once('|').ok_or_else(invalid)?;
        let created_at = DateTime::parse_from_rfc3339(created_at_s)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = id_s.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::new(created_at, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_restores_position() {
        let created_at = DateTime::parse_from_rfc3339("2024-03-05T10:11:12Z")
            .unwrap()
            .with_timezone(&Utc);
        let token = AuditLogCursor::new(created_at, 42).encode();
        let decoded = AuditLogCursor::decode(&token).expect("decode should succeed");
        assert_eq!(decoded.id, 42);
        assert_eq!(decoded.created_at, created_at);
    }

    #[test]
    fn garbage_tokens_are_validation_errors() {
        for token in ["", "!!!", "bm8tc2VwYXJhdG9y", "eHx5"] {
            let err = AuditLogCursor::decode(token).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "token {token:?}");
        }
    }
}

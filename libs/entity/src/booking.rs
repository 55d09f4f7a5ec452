use anyhow::ensure;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

/// One email registered against one event. Uniqueness of the
/// (event, email) pair is enforced by the store.
#[derive(Debug, Default, PartialEq, Clone, Serialize)]
pub struct Booking {
    pub id: i32,
    pub event_id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Simplified RFC 5322 shape check: one `@`, no whitespace, a dotted
/// domain segment.
pub fn validate_email(email: &str) -> anyhow::Result<()> {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?;
    ensure!(re.is_match(email), "please provide a valid email address");

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{normalize_email, validate_email};

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last@sub.domain.org").is_ok());
    }

    #[test]
    fn rejects_missing_at_or_domain() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a b@c.com").is_err());
        assert!(validate_email("@b.com").is_err());
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_email("  A@B.COM  "), "a@b.com");
    }
}

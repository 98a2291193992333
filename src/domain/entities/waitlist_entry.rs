use serde::Serialize;

use super::waitlist_outcome::WaitlistError;

/// Email address as it will be written to the waitlist table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    /// Trims surrounding whitespace and rejects empty input. Format checks are
    /// left to the input control and the store's own constraints.
    pub fn parse(raw: &str) -> Result<Self, WaitlistError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WaitlistError::MissingEmail);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Row body for a single waitlist insert.
#[derive(Debug, Serialize)]
pub struct NewWaitlistEntry<'a> {
    pub email: &'a str,
}

impl<'a> From<&'a WaitlistEmail> for NewWaitlistEntry<'a> {
    fn from(email: &'a WaitlistEmail) -> Self {
        Self {
            email: email.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let email = WaitlistEmail::parse("  founder@example.com \n").unwrap();
        assert_eq!(email.as_str(), "founder@example.com");
    }

    #[test]
    fn test_parse_keeps_case() {
        let email = WaitlistEmail::parse("Founder@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Founder@Example.COM");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(WaitlistEmail::parse(""), Err(WaitlistError::MissingEmail));
        assert_eq!(WaitlistEmail::parse("   \t"), Err(WaitlistError::MissingEmail));
    }

    #[test]
    fn test_parse_accepts_unusual_but_present_input() {
        // Presence is the only local rule; the store decides the rest.
        assert!(WaitlistEmail::parse("not-an-email").is_ok());
    }

    #[test]
    fn test_entry_serializes_email_only() {
        let email = WaitlistEmail::parse("a@b.io").unwrap();
        let body = serde_json::to_value([NewWaitlistEntry::from(&email)]).unwrap();
        assert_eq!(body, serde_json::json!([{ "email": "a@b.io" }]));
    }
}

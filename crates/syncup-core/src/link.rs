//! Mock bank-link token service
//!
//! Stands in for a Plaid-style link flow. Tokens are derived from their
//! inputs; nothing is stored or sent anywhere.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How long an issued link token stays valid
pub const LINK_TOKEN_TTL_MINUTES: i64 = 60;

/// Token handed to the client to open the link flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkToken {
    pub link_token: String,
    /// RFC 3339 timestamp
    pub expiration: String,
}

/// Result of exchanging a public token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub item_id: String,
}

/// Issue a link token for `user_id` expiring an hour from now
pub fn create_link_token(user_id: &str) -> LinkToken {
    create_link_token_at(user_id, Utc::now())
}

/// Issue a link token as of `now`
pub fn create_link_token_at(user_id: &str, now: DateTime<Utc>) -> LinkToken {
    let expiration = now + Duration::minutes(LINK_TOKEN_TTL_MINUTES);
    LinkToken {
        link_token: format!("mock-link-token-{}", user_id),
        expiration: expiration.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Exchange a public token for an access token and item id
pub fn exchange_public_token(public_token: &str) -> Result<AccessToken> {
    if public_token.is_empty() {
        return Err(Error::InvalidData("public_token required".to_string()));
    }

    Ok(AccessToken {
        access_token: format!("mock-access-{}", last_chars(public_token, 6)),
        item_id: format!("mock-item-{}", last_chars(public_token, 4)),
    })
}

/// The last `n` characters of `s` (all of it when shorter)
fn last_chars(s: &str, n: usize) -> &str {
    let skip = s.chars().count().saturating_sub(n);
    match s.char_indices().nth(skip) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_link_token() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap();
        let token = create_link_token_at("demo", now);

        assert_eq!(token.link_token, "mock-link-token-demo");
        assert_eq!(token.expiration, "2024-03-05T13:30:00.000Z");
    }

    #[test]
    fn test_exchange_public_token() {
        let access = exchange_public_token("public-sandbox-abcdef123456").unwrap();
        assert_eq!(access.access_token, "mock-access-123456");
        assert_eq!(access.item_id, "mock-item-3456");
    }

    #[test]
    fn test_exchange_short_token() {
        let access = exchange_public_token("abc").unwrap();
        assert_eq!(access.access_token, "mock-access-abc");
        assert_eq!(access.item_id, "mock-item-abc");
    }

    #[test]
    fn test_exchange_multibyte_token() {
        let access = exchange_public_token("tok-ééééééé").unwrap();
        assert_eq!(access.access_token, "mock-access-éééééé");
        assert_eq!(access.item_id, "mock-item-éééé");
    }

    #[test]
    fn test_exchange_empty_token() {
        assert!(matches!(
            exchange_public_token(""),
            Err(Error::InvalidData(_))
        ));
    }
}

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::Deserialize;
use serde::Serialize;

/// Discriminator between the two token kinds.
///
/// Access tokens are short-lived and accepted on ordinary protected requests;
/// refresh tokens are long-lived and accepted only when minting a new access
/// token. On the wire the kind travels as the boolean `refresh` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(matches!(self, TokenKind::Refresh))
    }
}

impl<'de> Deserialize<'de> for TokenKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let refresh = bool::deserialize(deserializer)?;
        Ok(if refresh {
            TokenKind::Refresh
        } else {
            TokenKind::Access
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => "access".fmt(f),
            TokenKind::Refresh => "refresh".fmt(f),
        }
    }
}

/// Signed identity claim set carried inside a token.
///
/// Immutable once issued; the issuer is the only place expiry and kind are
/// set. Serialized payload is the flat object `{sub, role, refresh, exp}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (username)
    pub sub: String,

    /// Role tag carried for the authorization layer
    pub role: String,

    /// Token kind, serialized as the `refresh` boolean claim
    #[serde(rename = "refresh")]
    pub kind: TokenKind,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// Check expiry against a caller-supplied timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(kind: TokenKind) -> TokenClaims {
        TokenClaims {
            sub: "alice".to_string(),
            role: "user".to_string(),
            kind,
            exp: 1_700_000_000,
        }
    }

    #[test]
    fn test_kind_serializes_as_refresh_flag() {
        let value = serde_json::to_value(claims(TokenKind::Refresh)).unwrap();
        assert_eq!(value["refresh"], serde_json::json!(true));
        assert_eq!(value["sub"], "alice");
        assert_eq!(value["role"], "user");
        assert_eq!(value["exp"], 1_700_000_000_i64);

        let value = serde_json::to_value(claims(TokenKind::Access)).unwrap();
        assert_eq!(value["refresh"], serde_json::json!(false));
    }

    #[test]
    fn test_kind_deserializes_from_refresh_flag() {
        let parsed: TokenClaims = serde_json::from_str(
            r#"{"sub":"alice","role":"user","refresh":true,"exp":1700000000}"#,
        )
        .unwrap();
        assert_eq!(parsed.kind, TokenKind::Refresh);
        assert_eq!(parsed, claims(TokenKind::Refresh));
    }

    #[test]
    fn test_is_expired() {
        let claims = claims(TokenKind::Access);

        assert!(!claims.is_expired(1_699_999_999));
        assert!(!claims.is_expired(1_700_000_000)); // Exactly at expiration
        assert!(claims.is_expired(1_700_000_001));
    }
}

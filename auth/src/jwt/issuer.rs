use std::sync::Arc;

use chrono::Duration;

use super::claims::TokenClaims;
use super::claims::TokenKind;
use super::codec::TokenCodec;
use super::errors::JwtError;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// Builds signed tokens for an authenticated identity.
///
/// Access and refresh tokens differ only in kind and lifetime; both funnel
/// through one claim-construction routine so neither kind can drift to the
/// other's expiry policy.
pub struct TokenIssuer {
    codec: TokenCodec,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Create an issuer using the system clock.
    ///
    /// # Arguments
    /// * `codec` - Codec holding the signing secret and algorithm
    /// * `access_minutes` - Access token lifetime in minutes
    /// * `refresh_days` - Refresh token lifetime in days
    pub fn new(codec: TokenCodec, access_minutes: i64, refresh_days: i64) -> Self {
        Self::with_clock(codec, access_minutes, refresh_days, Arc::new(SystemClock))
    }

    /// Create an issuer with an injected clock.
    pub fn with_clock(
        codec: TokenCodec,
        access_minutes: i64,
        refresh_days: i64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            codec,
            access_lifetime: Duration::minutes(access_minutes),
            refresh_lifetime: Duration::days(refresh_days),
            clock,
        }
    }

    /// Issue a short-lived access token.
    ///
    /// # Errors
    /// * `JwtError` - Token encoding failed
    pub fn issue_access_token(&self, subject: &str, role: &str) -> Result<String, JwtError> {
        self.issue(subject, role, TokenKind::Access)
    }

    /// Issue a long-lived refresh token.
    ///
    /// # Errors
    /// * `JwtError` - Token encoding failed
    pub fn issue_refresh_token(&self, subject: &str, role: &str) -> Result<String, JwtError> {
        self.issue(subject, role, TokenKind::Refresh)
    }

    // The single place kind and expiry are decided.
    fn issue(&self, subject: &str, role: &str, kind: TokenKind) -> Result<String, JwtError> {
        let lifetime = match kind {
            TokenKind::Access => self.access_lifetime,
            TokenKind::Refresh => self.refresh_lifetime,
        };

        let claims = TokenClaims {
            sub: subject.to_string(),
            role: role.to_string(),
            kind,
            exp: (self.clock.now() + lifetime).timestamp(),
        };

        self.codec.encode(&claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use chrono::Utc;

    use super::*;
    use crate::jwt::errors::JwtError;

    struct FrozenClock(DateTime<Utc>);

    impl Clock for FrozenClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, "HS256").expect("Failed to build codec")
    }

    #[test]
    fn test_access_token_kind_and_lifetime() {
        let now = Utc::now();
        let issuer = TokenIssuer::with_clock(codec(), 15, 2, Arc::new(FrozenClock(now)));

        let token = issuer
            .issue_access_token("alice", "user")
            .expect("Failed to issue token");
        let claims = codec().decode(&token).expect("Failed to decode token");

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.kind, TokenKind::Access);
        assert_eq!(claims.exp, now.timestamp() + 15 * 60);
    }

    #[test]
    fn test_refresh_token_kind_and_lifetime() {
        let now = Utc::now();
        let issuer = TokenIssuer::with_clock(codec(), 15, 2, Arc::new(FrozenClock(now)));

        let token = issuer
            .issue_refresh_token("alice", "user")
            .expect("Failed to issue token");
        let claims = codec().decode(&token).expect("Failed to decode token");

        assert_eq!(claims.kind, TokenKind::Refresh);
        assert_eq!(claims.exp, now.timestamp() + 2 * 24 * 60 * 60);
    }

    #[test]
    fn test_issuance_is_deterministic_for_a_fixed_clock() {
        let clock = Arc::new(FrozenClock(Utc::now()));
        let issuer = TokenIssuer::with_clock(codec(), 15, 2, clock);

        let first = issuer.issue_access_token("alice", "user").unwrap();
        let second = issuer.issue_access_token("alice", "user").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_refresh_token_expires_after_its_lifetime() {
        // One-day refresh lifetime, issued two days in the past
        let two_days_ago = Utc::now() - Duration::days(2);
        let issuer = TokenIssuer::with_clock(codec(), 15, 1, Arc::new(FrozenClock(two_days_ago)));

        let token = issuer
            .issue_refresh_token("alice", "user")
            .expect("Failed to issue token");

        let result = codec().decode(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }
}

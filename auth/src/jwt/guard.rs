use thiserror::Error;

use super::claims::TokenClaims;
use super::claims::TokenKind;
use super::codec::TokenCodec;
use super::errors::JwtError;

const BEARER_SCHEME: &str = "Bearer";

/// Failure modes of the request-time token gate, in check order.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Missing or malformed authorization credentials")]
    MissingCredential,

    #[error("Invalid authentication scheme")]
    InvalidScheme,

    #[error("Token is invalid or expired")]
    InvalidToken(#[source] JwtError),

    #[error("Please provide a valid access token")]
    AccessTokenRequired,

    #[error("Please provide a valid refresh token")]
    RefreshTokenRequired,
}

/// Request-time gate over a presented bearer token.
///
/// One guard type serves both protected-endpoint and refresh-endpoint use,
/// parameterized by the token kind it requires; extraction, scheme check, and
/// decoding are shared, only the kind check differs.
pub struct TokenGuard {
    codec: TokenCodec,
    required_kind: TokenKind,
}

impl TokenGuard {
    pub fn new(codec: TokenCodec, required_kind: TokenKind) -> Self {
        Self {
            codec,
            required_kind,
        }
    }

    pub fn required_kind(&self) -> TokenKind {
        self.required_kind
    }

    /// Verify the Authorization header value of a protected request.
    ///
    /// Walks the gate in order: extract the credential, check the Bearer
    /// scheme, decode and validate the token, then check the token kind.
    /// The validated claims are the only successful exit.
    ///
    /// # Errors
    /// * `MissingCredential` - No header, or no token after the scheme
    /// * `InvalidScheme` - Scheme is not `Bearer`
    /// * `InvalidToken` - Signature invalid, malformed, or expired
    /// * `AccessTokenRequired` / `RefreshTokenRequired` - Wrong token kind
    pub fn verify(&self, authorization: Option<&str>) -> Result<TokenClaims, AuthError> {
        let header = authorization.ok_or(AuthError::MissingCredential)?;

        let (scheme, token) = header
            .split_once(' ')
            .ok_or(AuthError::MissingCredential)?;

        if scheme != BEARER_SCHEME {
            return Err(AuthError::InvalidScheme);
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::MissingCredential);
        }

        let claims = self.codec.decode(token).map_err(AuthError::InvalidToken)?;

        if claims.kind != self.required_kind {
            return Err(match self.required_kind {
                TokenKind::Access => AuthError::AccessTokenRequired,
                TokenKind::Refresh => AuthError::RefreshTokenRequired,
            });
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::issuer::TokenIssuer;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, "HS256").expect("Failed to build codec")
    }

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(codec(), 15, 2)
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    #[test]
    fn test_access_guard_accepts_access_token() {
        let guard = TokenGuard::new(codec(), TokenKind::Access);
        let token = issuer().issue_access_token("alice", "user").unwrap();

        let claims = guard.verify(Some(&bearer(&token))).expect("Guard rejected");
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.kind, TokenKind::Access);
    }

    #[test]
    fn test_missing_header() {
        let guard = TokenGuard::new(codec(), TokenKind::Access);
        let result = guard.verify(None);
        assert!(matches!(result, Err(AuthError::MissingCredential)));
    }

    #[test]
    fn test_header_without_token() {
        let guard = TokenGuard::new(codec(), TokenKind::Access);
        assert!(matches!(
            guard.verify(Some("Bearer")),
            Err(AuthError::MissingCredential)
        ));
        assert!(matches!(
            guard.verify(Some("Bearer ")),
            Err(AuthError::MissingCredential)
        ));
    }

    #[test]
    fn test_wrong_scheme() {
        let guard = TokenGuard::new(codec(), TokenKind::Access);
        let token = issuer().issue_access_token("alice", "user").unwrap();

        let result = guard.verify(Some(&format!("Basic {token}")));
        assert!(matches!(result, Err(AuthError::InvalidScheme)));
    }

    #[test]
    fn test_garbled_token() {
        let guard = TokenGuard::new(codec(), TokenKind::Access);
        let result = guard.verify(Some("Bearer not.a.token"));
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_refresh_token_rejected_by_access_guard() {
        let guard = TokenGuard::new(codec(), TokenKind::Access);
        let token = issuer().issue_refresh_token("alice", "user").unwrap();

        let result = guard.verify(Some(&bearer(&token)));
        assert!(matches!(result, Err(AuthError::AccessTokenRequired)));
    }

    #[test]
    fn test_access_token_rejected_by_refresh_guard() {
        let guard = TokenGuard::new(codec(), TokenKind::Refresh);
        let token = issuer().issue_access_token("alice", "user").unwrap();

        let result = guard.verify(Some(&bearer(&token)));
        assert!(matches!(result, Err(AuthError::RefreshTokenRequired)));
    }

    #[test]
    fn test_refresh_guard_accepts_refresh_token() {
        let guard = TokenGuard::new(codec(), TokenKind::Refresh);
        let token = issuer().issue_refresh_token("alice", "admin").unwrap();

        let claims = guard.verify(Some(&bearer(&token))).expect("Guard rejected");
        assert_eq!(claims.kind, TokenKind::Refresh);
        assert_eq!(claims.role, "admin");
    }
}

use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Owns the hasher and issuer so the login path has a single entry point:
/// verify the stored credential, then mint the access/refresh pair.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Access and refresh tokens minted together at login time.
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Jwt(#[from] JwtError),
}

impl Authenticator {
    pub fn new(token_issuer: TokenIssuer) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and mint an access/refresh token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match; no tokens are issued
    /// * `Jwt` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        role: &str,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(TokenPair {
            access_token: self.token_issuer.issue_access_token(subject, role)?,
            refresh_token: self.token_issuer.issue_refresh_token(subject, role)?,
        })
    }

    /// Mint a fresh access token without password verification.
    ///
    /// For the refresh flow, where the presented refresh token has already
    /// been validated by the guard.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_access_token(&self, subject: &str, role: &str) -> Result<String, JwtError> {
        self.token_issuer.issue_access_token(subject, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::TokenCodec;
    use crate::jwt::TokenGuard;
    use crate::jwt::TokenKind;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, "HS256").expect("Failed to build codec")
    }

    fn authenticator() -> Authenticator {
        Authenticator::new(TokenIssuer::new(codec(), 15, 2))
    }

    #[test]
    fn test_authenticate_success_mints_both_kinds() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let tokens = authenticator
            .authenticate(password, &hash, "alice", "user")
            .expect("Authentication failed");

        let access = codec().decode(&tokens.access_token).unwrap();
        assert_eq!(access.sub, "alice");
        assert_eq!(access.kind, TokenKind::Access);

        let refresh = codec().decode(&tokens.refresh_token).unwrap();
        assert_eq!(refresh.sub, "alice");
        assert_eq!(refresh.kind, TokenKind::Refresh);
    }

    #[test]
    fn test_authenticate_wrong_password_issues_nothing() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "alice", "user");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issued_access_token_passes_the_access_guard() {
        let authenticator = authenticator();

        let token = authenticator
            .issue_access_token("alice", "user")
            .expect("Failed to issue token");

        let guard = TokenGuard::new(codec(), TokenKind::Access);
        let header = format!("Bearer {token}");
        let claims = guard.verify(Some(&header)).expect("Guard rejected");
        assert_eq!(claims.sub, "alice");
    }
}

use std::str::FromStr;

use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::JwtError;

/// Token encoder/decoder bound to a shared secret and signing algorithm.
///
/// Produces the standard compact three-segment form: a header declaring the
/// algorithm, the claims payload, and an HMAC signature over both. Encoding is
/// deterministic for identical claims. Secret and algorithm come from startup
/// configuration and never change afterwards.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec from the configured secret and algorithm name.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm name is not a known JWT algorithm
    pub fn new(secret: &[u8], algorithm: &str) -> Result<Self, JwtError> {
        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| JwtError::UnsupportedAlgorithm(algorithm.to_string()))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        })
    }

    /// Encode claims into a signed token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &TokenClaims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token string.
    ///
    /// Checks structure, signature, declared algorithm, and expiry. Expiry is
    /// reported as its own variant so callers can distinguish "expired" from
    /// "forged or garbled" when they care to.
    ///
    /// # Errors
    /// * `TokenExpired` - Claims are valid but the expiry has elapsed
    /// * `DecodingFailed` - Malformed structure, bad signature, or wrong algorithm
    pub fn decode(&self, token: &str) -> Result<TokenClaims, JwtError> {
        let validation = Validation::new(self.algorithm);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::DecodingFailed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::jwt::claims::TokenKind;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, "HS256").expect("Failed to build codec")
    }

    fn valid_claims() -> TokenClaims {
        TokenClaims {
            sub: "alice".to_string(),
            role: "user".to_string(),
            kind: TokenKind::Access,
            exp: (Utc::now() + Duration::minutes(15)).timestamp(),
        }
    }

    #[test]
    fn test_encode_and_decode_round_trip() {
        let codec = codec();
        let claims = valid_claims();

        let token = codec.encode(&claims).expect("Failed to encode token");
        assert_eq!(token.split('.').count(), 3);

        let decoded = codec.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let codec = codec();
        let claims = valid_claims();

        let first = codec.encode(&claims).expect("Failed to encode token");
        let second = codec.encode(&claims).expect("Failed to encode token");
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_malformed_token() {
        let codec = codec();

        let result = codec.decode("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let codec = codec();
        let other = TokenCodec::new(b"different_secret_32_bytes_long_too!", "HS256").unwrap();

        let token = codec.encode(&valid_claims()).expect("Failed to encode");

        let result = other.decode(&token);
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        let codec = codec();
        let claims = TokenClaims {
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
            ..valid_claims()
        };

        // Correctly signed, but past expiry
        let token = codec.encode(&claims).expect("Failed to encode");

        let result = codec.decode(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let result = TokenCodec::new(SECRET, "HS4096");
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
    }
}

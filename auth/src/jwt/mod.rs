pub mod claims;
pub mod codec;
pub mod errors;
pub mod guard;
pub mod issuer;

pub use claims::TokenClaims;
pub use claims::TokenKind;
pub use codec::TokenCodec;
pub use errors::JwtError;
pub use guard::AuthError;
pub use guard::TokenGuard;
pub use issuer::TokenIssuer;

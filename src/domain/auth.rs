use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT claims identifying the acting user.
///
/// Tokens are issued by an external service sharing the `SECRET_KEY`; this
/// crate only verifies them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Subject claim, used as the snippet owner key.
    pub sub: String,
    /// Email address of the user.
    pub email: String,
    /// Display name of the user.
    pub name: String,
    /// Expiration timestamp (seconds since the epoch).
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Sign the claims into a compact JWT with the shared secret.
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Verify a compact JWT and extract the claims.
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

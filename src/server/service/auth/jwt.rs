//! HS256 bearer access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, model::user::User};

const ACCESS_TOKEN_TYPE: &str = "access";

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User id, as a string.
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: String,
}

/// Issues and verifies access tokens signed with the configured secret.
#[derive(Clone)]
pub struct AccessTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl AccessTokenService {
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
        }
    }

    /// Issues an access token for `user` valid for the configured lifetime.
    pub fn issue(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verifies signature, expiry and token type, and returns the user id.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the user the token was issued to
    /// - `Err(AuthError::InvalidToken)` - The token is malformed, forged, expired or not
    ///   an access token
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let claims = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?
            .claims;

        if claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(AuthError::InvalidToken(format!(
                "unexpected token type '{}'",
                claims.token_type
            )));
        }

        claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("invalid subject '{}'", claims.sub)))
    }
}

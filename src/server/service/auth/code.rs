//! Stateless email confirmation codes.
//!
//! A code is `"<issued-at base36>-<hmac hex>"`. The HMAC-SHA256 covers the user's id,
//! username and email plus the issue timestamp, so nothing has to be stored: a code
//! is checked by recomputing the MAC for the user presenting it. Changing the
//! username or email invalidates every outstanding code.

use std::sync::Arc;

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::server::{error::AppError, model::user::User};

type HmacSha256 = Hmac<Sha256>;

/// Generates and verifies confirmation codes for a fixed secret and timeout.
#[derive(Clone)]
pub struct ConfirmationCodeService {
    secret: Arc<[u8]>,
    timeout: Duration,
}

impl ConfirmationCodeService {
    /// Creates a code service.
    ///
    /// # Arguments
    /// - `secret` - Signing key shared with nothing outside this service
    /// - `timeout` - How long a code stays valid after it was issued
    pub fn new(secret: &str, timeout: Duration) -> Self {
        Self {
            secret: Arc::from(secret.as_bytes()),
            timeout,
        }
    }

    /// Generates a code for `user` issued now.
    pub fn generate(&self, user: &User) -> Result<String, AppError> {
        self.generate_at(user, Utc::now().timestamp())
    }

    fn generate_at(&self, user: &User, issued_at: i64) -> Result<String, AppError> {
        let mac = self.mac(user, issued_at)?;
        let signature = hex::encode(mac.finalize().into_bytes());

        Ok(format!("{}-{}", to_base36(issued_at.max(0) as u64), signature))
    }

    /// Checks `code` against `user` at the current time.
    ///
    /// # Returns
    /// - `true` - The code was issued for this user and has not expired
    /// - `false` - The code is malformed, forged, issued for other user data, or expired
    pub fn verify(&self, user: &User, code: &str) -> bool {
        self.verify_at(user, code, Utc::now().timestamp())
    }

    fn verify_at(&self, user: &User, code: &str, now: i64) -> bool {
        let Some((timestamp, signature)) = code.trim().split_once('-') else {
            return false;
        };
        let Ok(issued_at) = u64::from_str_radix(timestamp, 36) else {
            return false;
        };
        let Ok(issued_at) = i64::try_from(issued_at) else {
            return false;
        };
        if issued_at > now || now - issued_at > self.timeout.num_seconds() {
            return false;
        }
        let Ok(signature) = hex::decode(signature) else {
            return false;
        };

        match self.mac(user, issued_at) {
            Ok(mac) => mac.verify_slice(&signature).is_ok(),
            Err(_) => false,
        }
    }

    fn mac(&self, user: &User, issued_at: i64) -> Result<HmacSha256, AppError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AppError::InternalError(format!("Invalid confirmation key: {}", e)))?;
        mac.update(
            format!("{}:{}:{}:{}", user.id, user.username, user.email, issued_at).as_bytes(),
        );

        Ok(mac)
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }

    digits.iter().rev().collect()
}

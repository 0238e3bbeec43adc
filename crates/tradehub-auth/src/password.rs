use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// bcrypt work factor used in production. Heavy enough to make offline
/// brute force expensive without wrecking interactive login latency.
pub const DEFAULT_COST: u32 = 10;

/// One-way salted password hashing with constant-time verification.
///
/// bcrypt embeds a random salt and the work factor in the hash string, so
/// hashing the same password twice yields different strings and both
/// verify. The comparison inside `verify` is constant-time.
///
/// Key stretching is CPU-bound, so both operations run on the blocking
/// pool rather than stalling the async scheduler.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    /// Create a hasher with an explicit work factor. Tests pass bcrypt's
    /// minimum cost to keep the suite fast.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a raw password with a fresh random salt
    #[track_caller]
    pub async fn hash(&self, raw: &str) -> AuthErrorResult<String> {
        let caller = Location::caller();
        let raw = raw.to_owned();
        let cost = self.cost;

        match tokio::task::spawn_blocking(move || bcrypt::hash(raw, cost)).await {
            Ok(Ok(hash)) => Ok(hash),
            Ok(Err(source)) => Err(AuthError::Hash {
                source,
                location: ErrorLocation::from(caller),
            }),
            Err(join) => Err(AuthError::Task {
                message: format!("password hashing task failed: {join}"),
                location: ErrorLocation::from(caller),
            }),
        }
    }

    /// Compare a raw candidate against a stored hash.
    ///
    /// Always settles to a bool: malformed stored hashes and over-length
    /// candidates verify false rather than erroring, so the login path has
    /// exactly two outcomes.
    pub async fn verify(&self, raw: &str, hash: &str) -> bool {
        let raw = raw.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(raw, &hash))
            .await
            .map(|result| result.unwrap_or(false))
            .unwrap_or(false)
    }
}

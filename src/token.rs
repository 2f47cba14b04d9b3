use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of hex characters kept from the HMAC tag.
const TOKEN_LENGTH: usize = 16;

/// Mints and verifies the action-scoped tokens that guard form submissions.
///
/// Handlers receive this through the application state so tests can swap in
/// their own implementation.
pub trait TokenService: Send + Sync {
    /// Mint a fresh token bound to `action`.
    fn issue(&self, action: &str) -> String;
    /// Check a submitted token against `action`. An absent token never
    /// verifies.
    fn verify(&self, token: &str, action: &str) -> bool;
}

/// Time-boxed HMAC tokens.
///
/// A token is a truncated hex HMAC-SHA256 tag over the current time window
/// and the action name. Verification accepts the current and the previous
/// window, so a token stays valid for at least half a lifetime and at most a
/// full one. Tokens are not single-use.
pub struct HmacTokenService {
    secret: Secret<String>,
    lifetime_seconds: u64,
}

impl HmacTokenService {
    pub fn new(secret: Secret<String>, lifetime_seconds: u64) -> Self {
        Self {
            secret,
            lifetime_seconds,
        }
    }

    fn current_window(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        now / (self.lifetime_seconds / 2).max(1)
    }

    fn tag(&self, window: u64, action: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(format!("{}|{}", window, action).as_bytes());
        let digest = hex::encode(mac.finalize().into_bytes());
        digest[..TOKEN_LENGTH].to_string()
    }
}

impl TokenService for HmacTokenService {
    fn issue(&self, action: &str) -> String {
        self.tag(self.current_window(), action)
    }

    fn verify(&self, token: &str, action: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        let window = self.current_window();
        token == self.tag(window, action)
            || (window > 0 && token == self.tag(window - 1, action))
    }
}

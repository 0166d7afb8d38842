//! Access token state for the client-credentials grant.

use reqwest::header::HeaderValue;
use serde::Deserialize;
use std::fmt;
use std::time::{Duration, Instant};

/// How much earlier than announced by the upstream a token is treated as expired.
pub const SAFETY_MARGIN: Duration = Duration::from_secs(60);

/// Application credentials registered with Reddit.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: user_agent.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Body of a successful access token response.
#[derive(Debug, Deserialize)]
pub(crate) struct AccessTokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// The bearer header currently in use and when it stops being usable.
///
/// A state without an expiry instant is expired.
#[derive(Debug, Default)]
pub(crate) struct TokenState {
    bearer: Option<HeaderValue>,
    expires_at: Option<Instant>,
}

impl TokenState {
    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => true,
        }
    }

    /// The bearer header, only if it may still be sent at `now`.
    pub(crate) fn valid_bearer(&self, now: Instant) -> Option<&HeaderValue> {
        if self.is_expired(now) {
            return None;
        }
        self.bearer.as_ref()
    }

    /// Replaces the token. The returned header is marked sensitive so it never shows up in logs.
    pub(crate) fn store(
        &mut self,
        access_token: &str,
        expires_in: u64,
        now: Instant,
    ) -> Result<HeaderValue, reqwest::header::InvalidHeaderValue> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {access_token}"))?;
        bearer.set_sensitive(true);
        self.bearer = Some(bearer.clone());
        self.expires_at = Some(expiry_after(now, expires_in));
        Ok(bearer)
    }

    pub(crate) fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }
}

/// `now + expires_in - SAFETY_MARGIN`, never earlier than `now`.
pub(crate) fn expiry_after(now: Instant, expires_in: u64) -> Instant {
    now.checked_add(Duration::from_secs(expires_in))
        .and_then(|at| at.checked_sub(SAFETY_MARGIN))
        .filter(|at| *at >= now)
        .unwrap_or(now)
}

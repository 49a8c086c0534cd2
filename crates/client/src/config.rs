//! Client configuration.

use std::time::Duration;

use chrono_tz::Tz;
use url::Url;

/// The wall-clock zone of the production EquipsTIC server.
pub const DEFAULT_SERVER_TIME_ZONE: Tz = chrono_tz::Europe::Madrid;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for building a client: API base URL, Basic-Auth
/// credentials, the server's wall-clock zone and the request timeout.
///
/// The zone is not used by the transport itself; it is the value date
/// helpers need to interpret the naive date-times the server emits (see
/// [`equipstic_domain::ServerLocalDateTime`]).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, as documented by the SOA bus.
    pub base_url: Url,
    /// SOA bus username with access to the API.
    pub username: String,
    /// SOA bus password.
    pub password: String,
    /// Server wall-clock zone. Defaults to [`DEFAULT_SERVER_TIME_ZONE`].
    pub time_zone: Tz,
    /// Per-request timeout. Defaults to [`DEFAULT_TIMEOUT`].
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with the default zone and timeout.
    #[must_use]
    pub fn new(base_url: Url, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url,
            username: username.into(),
            password: password.into(),
            time_zone: DEFAULT_SERVER_TIME_ZONE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the server wall-clock zone.
    #[must_use]
    pub const fn with_time_zone(mut self, zone: Tz) -> Self {
        self.time_zone = zone;
        self
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

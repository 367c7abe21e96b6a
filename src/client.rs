//! HTTP client for the external trajectory service.
//!
//! One request per evaluation, no retries. Every failure (transport, non-2xx
//! status, malformed body) collapses into [`CaddieError::TrajectoryFailed`];
//! the specific cause stays on the error's `source()` for logging.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{CaddieError, FetchError, Result};
use crate::trajectory::{TRAJECTORY_PATH, TrajectoryRequest, TrajectoryResult};

/// Public trajectory service.
pub const DEFAULT_API_BASE: &str = "https://golf-weather-api.vercel.app";

/// Header carrying the optional API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Connection settings for [`TrajectoryClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host, without the `/v1/...` path.
    pub api_base: String,
    /// Sent as `X-API-Key` when present.
    pub api_key: Option<String>,
    /// Whole-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into(), ..Self::default() }
    }
}

/// Async client for `POST {api_base}/v1/trajectory`.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use caddie::{Conditions, ShotParameters, TrajectoryClient, TrajectoryRequest};
///
/// # async fn run() -> caddie::Result<()> {
/// let client = TrajectoryClient::new(Default::default())?;
/// let request = TrajectoryRequest {
///     shot: ShotParameters::derive("7-iron", 165.0)?,
///     conditions: Conditions::calm(),
/// };
/// let result = client.fetch(&request).await?;
/// println!("adjusted carry: {:.1} yd", result.adjusted.carry_yards);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TrajectoryClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl TrajectoryClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FetchError::from)?;
        let endpoint = format!("{}{}", config.api_base.trim_end_matches('/'), TRAJECTORY_PATH);
        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key,
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one shot and its conditions, returning the parsed result.
    pub async fn fetch(&self, request: &TrajectoryRequest) -> Result<TrajectoryResult> {
        debug!(
            endpoint = %self.endpoint,
            ball_speed_mph = request.shot.ball_speed_mph,
            wind_speed_mph = request.conditions.wind_speed_mph,
            "requesting trajectory"
        );
        match self.fetch_inner(request).await {
            Ok(result) => {
                debug!(
                    baseline_carry = result.baseline.carry_yards,
                    adjusted_carry = result.adjusted.carry_yards,
                    "trajectory received"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "trajectory request failed");
                Err(CaddieError::TrajectoryFailed(e))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    async fn fetch_inner(
        &self,
        request: &TrajectoryRequest,
    ) -> std::result::Result<TrajectoryResult, FetchError> {
        let mut req = self.http.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

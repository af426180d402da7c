use std::env;
use std::time::Duration;

use foundation::math::{ArcParams, DEFAULT_ARC_BULGE, DEFAULT_ARC_SAMPLES};
use layers::{CLUSTER_RADIUS, ROUTE_RADIUS};

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000/api/routing";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct GlobeConfig {
    pub service_url: String,
    pub timeout: Duration,
    pub route_radius: f64,
    pub cluster_radius: f64,
    pub arc: ArcParams,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            route_radius: ROUTE_RADIUS,
            cluster_radius: CLUSTER_RADIUS,
            arc: ArcParams::default(),
        }
    }
}

impl GlobeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset or unparseable variables keep their defaults, as does a timeout
    /// too large to represent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var_f64 = |key: &str, default: f64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };
        let var_usize = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            service_url: lookup("ROUTING_URL").unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
            timeout: Duration::try_from_secs_f64(var_f64("ROUTING_TIMEOUT_S", 30.0).max(0.1))
                .unwrap_or(DEFAULT_TIMEOUT),
            route_radius: var_f64("ROUTE_RADIUS", ROUTE_RADIUS),
            cluster_radius: var_f64("CLUSTER_RADIUS", CLUSTER_RADIUS),
            arc: ArcParams::new(
                var_f64("ARC_BULGE", DEFAULT_ARC_BULGE),
                var_usize("ARC_SAMPLES", DEFAULT_ARC_SAMPLES),
            ),
        }
    }
}

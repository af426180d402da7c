use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::protocol::{
    BoundingBox, CitiesResponse, City, ErrorBody, KMeansResponse, PathResponse, RouteRequest,
    RouteResponse, TourResponse,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never produced a response (connect, timeout, body read).
    Transport(String),
    /// A 2xx response whose body did not match the expected shape.
    Decode(String),
    /// A non-2xx response; `message` is the service's `error` field when present.
    Service { status: u16, message: String },
}

impl ServiceError {
    pub fn is_service_reported(&self) -> bool {
        matches!(self, ServiceError::Service { .. })
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Transport(msg) => f.write_str(msg),
            ServiceError::Decode(msg) => write!(f, "invalid response: {msg}"),
            ServiceError::Service { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for ServiceError {}

/// The external routing service, as seen by the overlay controller.
#[allow(async_fn_in_trait)]
pub trait RoutingService {
    async fn cities(&self) -> Result<Vec<City>, ServiceError>;

    async fn search_cities(&self, bbox: BoundingBox) -> Result<Vec<City>, ServiceError>;

    async fn route(&self, request: &RouteRequest) -> Result<RouteResponse, ServiceError>;
}

/// HTTP client for the routing service.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    base_url: String,
    http: reqwest::Client,
}

impl RoutingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let url = self.url(path);
        debug!("GET {url}");
        let resp = self.http.get(&url).send().await.map_err(|err| {
            warn!("GET {url} failed: {err}");
            ServiceError::Transport(err.to_string())
        })?;
        decode_response(resp).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let url = self.url(path);
        debug!("POST {url}");
        let resp = self.http.post(&url).json(body).send().await.map_err(|err| {
            warn!("POST {url} failed: {err}");
            ServiceError::Transport(err.to_string())
        })?;
        decode_response(resp).await
    }
}

async fn decode_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ServiceError> {
    let status = resp.status();
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| ServiceError::Transport(e.to_string()))?;

    if !status.is_success() {
        let message = match serde_json::from_slice::<ErrorBody>(&bytes) {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        warn!("routing service returned {status}: {message}");
        return Err(ServiceError::Service {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode(e.to_string()))
}

impl RoutingService for RoutingClient {
    async fn cities(&self) -> Result<Vec<City>, ServiceError> {
        let resp: CitiesResponse = self.get_json("/cities").await?;
        Ok(resp.cities)
    }

    async fn search_cities(&self, bbox: BoundingBox) -> Result<Vec<City>, ServiceError> {
        let resp: CitiesResponse = self.post_json("/cities/search", &bbox).await?;
        Ok(resp.cities)
    }

    async fn route(&self, request: &RouteRequest) -> Result<RouteResponse, ServiceError> {
        let endpoint = request.algorithm().endpoint();
        match request {
            RouteRequest::Dijkstra(body) => {
                let resp: PathResponse = self.post_json(endpoint, body).await?;
                Ok(RouteResponse::Path(resp))
            }
            RouteRequest::Tsp(body) => {
                let resp: TourResponse = self.post_json(endpoint, body).await?;
                Ok(RouteResponse::Tour(resp))
            }
            RouteRequest::KMeans(body) => {
                let resp: KMeansResponse = self.post_json(endpoint, body).await?;
                Ok(RouteResponse::Clusters(resp.clusters))
            }
        }
    }
}

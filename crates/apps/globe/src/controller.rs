//! Algorithm tabs and the overlay lifecycle around each computation.
//!
//! Every mode switch and every recompute clears the overlay registry before
//! anything new is drawn. Requests are split into `begin_*` and `finish` so an
//! event loop can have several in flight; only the latest issued generation is
//! ever applied.

use layers::{
    CityMarkers, ClusterRenderer, DEFAULT_PALETTE, DIJKSTRA_COLOR, MarkerStyle, OverlayRegistry,
    RouteRenderer, TSP_COLOR,
};
use routing::{
    Algorithm, City, CityId, DijkstraRequest, KMeansRequest, RouteRequest, RouteResponse,
    RoutingService, ServiceError, TspRequest,
};
use runtime::{Generation, RequestGenerations};
use scene::components::Color;
use scene::SceneSink;
use tracing::{debug, info, warn};

use crate::config::GlobeConfig;
use crate::panel::ResultPanel;
use crate::report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NotEnoughCities { required: usize, selected: usize },
    NoClusters,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotEnoughCities { required, .. } => {
                write!(f, "Please select at least {required} cities.")
            }
            ValidationError::NoClusters => write!(f, "Please request at least 1 cluster."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A request that passed validation and is waiting for the service.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub generation: Generation,
    pub request: RouteRequest,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A newer request or a mode switch superseded this one.
    Stale,
}

pub struct ModeController<S, P> {
    mode: Algorithm,
    scene: S,
    panel: P,
    registry: OverlayRegistry,
    generations: RequestGenerations,
    cities: Vec<City>,
    city_markers: CityMarkers,
    city_style: MarkerStyle,
    routes: RouteRenderer,
    clusters: ClusterRenderer,
    palette: Vec<Color>,
}

impl<S: SceneSink, P: ResultPanel> ModeController<S, P> {
    pub fn new(scene: S, panel: P) -> Self {
        Self::with_config(scene, panel, &GlobeConfig::default())
    }

    pub fn with_config(scene: S, panel: P, config: &GlobeConfig) -> Self {
        let mut cluster_style = MarkerStyle::cluster();
        cluster_style.radius = config.cluster_radius;

        let mut controller = Self {
            mode: Algorithm::Dijkstra,
            scene,
            panel,
            registry: OverlayRegistry::new(),
            generations: RequestGenerations::new(),
            cities: Vec::new(),
            city_markers: CityMarkers::new(),
            city_style: MarkerStyle::city(),
            routes: RouteRenderer::new(config.route_radius, config.arc),
            clusters: ClusterRenderer::new(cluster_style),
            palette: DEFAULT_PALETTE.to_vec(),
        };
        controller.panel.activate_controls(controller.mode);
        controller
    }

    pub fn mode(&self) -> Algorithm {
        self.mode
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn registry(&self) -> &OverlayRegistry {
        &self.registry
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Vec<Color>) {
        self.palette = palette;
    }

    pub fn switch_mode(&mut self, next: Algorithm) {
        debug!("switching mode {} -> {next}", self.mode);
        self.mode = next;
        self.panel.activate_controls(next);
        self.panel.clear_result();
        self.panel.set_loading(false);
        self.registry.clear(&mut self.scene);
        self.generations.invalidate();
    }

    /// Fetches the city list and replaces the base city markers.
    pub async fn load_cities<R: RoutingService>(
        &mut self,
        service: &R,
    ) -> Result<usize, ServiceError> {
        self.panel.set_loading(true);
        let result = service.cities().await;
        self.panel.set_loading(false);

        match result {
            Ok(cities) => {
                self.city_markers.spawn(&cities, self.city_style, &mut self.scene);
                self.cities = cities;
                info!("loaded {} cities", self.cities.len());
                Ok(self.cities.len())
            }
            Err(err) => {
                warn!("loading cities failed: {err}");
                self.panel.show_result(&format!("Error loading cities: {err}"));
                Err(err)
            }
        }
    }

    pub fn begin_dijkstra(
        &mut self,
        start_city_id: CityId,
        end_city_id: CityId,
    ) -> Result<PendingRequest, ValidationError> {
        self.begin(RouteRequest::Dijkstra(DijkstraRequest {
            start_city_id,
            end_city_id,
        }))
    }

    /// The tour starts at the first selected city.
    pub fn begin_tsp(&mut self, city_ids: &[CityId]) -> Result<PendingRequest, ValidationError> {
        self.begin(RouteRequest::Tsp(TspRequest {
            city_ids: city_ids.to_vec(),
            start_city_id: city_ids.first().copied().unwrap_or_default(),
        }))
    }

    pub fn begin_kmeans(
        &mut self,
        city_ids: &[CityId],
        num_clusters: u32,
    ) -> Result<PendingRequest, ValidationError> {
        self.begin(RouteRequest::KMeans(KMeansRequest {
            city_ids: city_ids.to_vec(),
            num_clusters,
        }))
    }

    /// Validates, clears overlays and issues a new generation.
    ///
    /// On a validation failure the message goes to the panel, overlays stay
    /// as they are, and any request still in flight becomes stale.
    pub fn begin(&mut self, request: RouteRequest) -> Result<PendingRequest, ValidationError> {
        if let Err(err) = validate(&request) {
            debug!("{} request rejected: {err}", request.algorithm());
            self.generations.invalidate();
            self.panel.set_loading(false);
            self.panel.show_result(&err.to_string());
            return Err(err);
        }

        self.registry.clear(&mut self.scene);
        self.panel.set_loading(true);
        let generation = self.generations.issue();
        info!("{} request issued (generation {})", request.algorithm(), generation.0);
        Ok(PendingRequest {
            generation,
            request,
        })
    }

    pub fn finish(
        &mut self,
        pending: PendingRequest,
        outcome: Result<RouteResponse, ServiceError>,
    ) -> Outcome {
        if !self.generations.is_current(pending.generation) {
            debug!(
                "dropping stale {} response (generation {}, latest {})",
                pending.request.algorithm(),
                pending.generation.0,
                self.generations.latest().0
            );
            return Outcome::Stale;
        }

        self.panel.set_loading(false);
        match outcome {
            Ok(response) => self.apply(response),
            Err(err) => {
                warn!("{} request failed: {err}", pending.request.algorithm());
                let message = report::failure_message(pending.request.algorithm(), &err);
                self.panel.show_result(&message);
            }
        }
        Outcome::Applied
    }

    /// `begin`, call the service, then `finish`.
    pub async fn compute<R: RoutingService>(
        &mut self,
        service: &R,
        request: RouteRequest,
    ) -> Result<Outcome, ValidationError> {
        let pending = self.begin(request)?;
        let outcome = service.route(&pending.request).await;
        Ok(self.finish(pending, outcome))
    }

    fn apply(&mut self, response: RouteResponse) {
        self.registry.clear(&mut self.scene);

        match response {
            RouteResponse::Path(resp) => {
                let arcs = self.routes.render_route(
                    &resp.path,
                    DIJKSTRA_COLOR,
                    &mut self.scene,
                    &mut self.registry,
                );
                debug!("drew shortest path with {arcs} arcs");
                self.panel
                    .show_result(&report::route_summary("Route", &resp.path, resp.total_distance));
            }
            RouteResponse::Tour(resp) => {
                let arcs = self.routes.render_route(
                    &resp.tour,
                    TSP_COLOR,
                    &mut self.scene,
                    &mut self.registry,
                );
                debug!("drew tour with {arcs} arcs");
                self.panel.show_result(&report::route_summary(
                    "TSP route",
                    &resp.tour,
                    resp.total_distance,
                ));
            }
            RouteResponse::Clusters(assignment) => {
                let markers = self.clusters.render_clusters(
                    &assignment,
                    &self.palette,
                    &mut self.scene,
                    &mut self.registry,
                );
                debug!("drew {} clusters with {markers} markers", assignment.len());
                self.panel.show_result(&report::cluster_summary(&assignment));
            }
        }
    }
}

fn validate(request: &RouteRequest) -> Result<(), ValidationError> {
    match request {
        RouteRequest::Dijkstra(_) => Ok(()),
        RouteRequest::Tsp(req) => {
            if req.city_ids.len() < 2 {
                return Err(ValidationError::NotEnoughCities {
                    required: 2,
                    selected: req.city_ids.len(),
                });
            }
            Ok(())
        }
        RouteRequest::KMeans(req) => {
            if req.num_clusters == 0 {
                return Err(ValidationError::NoClusters);
            }
            let required = req.num_clusters as usize;
            if req.city_ids.len() < required {
                return Err(ValidationError::NotEnoughCities {
                    required,
                    selected: req.city_ids.len(),
                });
            }
            Ok(())
        }
    }
}

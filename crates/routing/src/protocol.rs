//! Wire types for the routing service.
//!
//! Cities, routes and clusters are computed server-side; this crate only
//! describes the JSON exchanged with it:
//! - `GET  /cities`         -> `{ cities }`
//! - `POST /cities/search`  -> `{ cities }`
//! - `POST /route/dijkstra` -> `{ path, total_distance }`
//! - `POST /route/tsp`      -> `{ tour, total_distance }`
//! - `POST /route/kmeans`   -> `{ clusters: { "<idx>": [City] } }`
//!
//! Failures are non-2xx responses carrying `{ error }`.

use std::fmt;

use foundation::math::GeoCoordinate;
use serde::de::{self, MapAccess};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type CityId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

/// The three computations the service offers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Dijkstra,
    Tsp,
    KMeans,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Tsp => "tsp",
            Algorithm::KMeans => "kmeans",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "/route/dijkstra",
            Algorithm::Tsp => "/route/tsp",
            Algorithm::KMeans => "/route/kmeans",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub cities: Vec<City>,
}

/// Search region in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraRequest {
    pub start_city_id: CityId,
    pub end_city_id: CityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TspRequest {
    pub city_ids: Vec<CityId>,
    pub start_city_id: CityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KMeansRequest {
    pub city_ids: Vec<CityId>,
    pub num_clusters: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteRequest {
    Dijkstra(DijkstraRequest),
    Tsp(TspRequest),
    KMeans(KMeansRequest),
}

impl RouteRequest {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            RouteRequest::Dijkstra(_) => Algorithm::Dijkstra,
            RouteRequest::Tsp(_) => Algorithm::Tsp,
            RouteRequest::KMeans(_) => Algorithm::KMeans,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResponse {
    pub path: Vec<City>,
    pub total_distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourResponse {
    pub tour: Vec<City>,
    pub total_distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KMeansResponse {
    pub clusters: ClusterAssignment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteResponse {
    Path(PathResponse),
    Tour(TourResponse),
    Clusters(ClusterAssignment),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Cluster index as sent by the service (a stringified integer).
    pub key: String,
    pub cities: Vec<City>,
}

impl Cluster {
    /// 1-based label for display; non-numeric keys are shown as-is.
    pub fn label(&self) -> String {
        match self.key.trim().parse::<u64>() {
            Ok(idx) => (idx + 1).to_string(),
            Err(_) => self.key.clone(),
        }
    }
}

/// Cluster membership in the order the service listed it.
///
/// That order is the palette order, so this (de)serializes the JSON object
/// entry by entry instead of going through a sorted map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterAssignment {
    pub clusters: Vec<Cluster>,
}

impl ClusterAssignment {
    pub fn new(clusters: Vec<Cluster>) -> Self {
        Self { clusters }
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl Serialize for ClusterAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.clusters.len()))?;
        for cluster in &self.clusters {
            map.serialize_entry(&cluster.key, &cluster.cities)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ClusterAssignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ClustersVisitor;

        impl<'de> de::Visitor<'de> for ClustersVisitor {
            type Value = ClusterAssignment;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of cluster index to cities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut clusters = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, cities)) = map.next_entry::<String, Vec<City>>()? {
                    clusters.push(Cluster { key, cities });
                }
                Ok(ClusterAssignment { clusters })
            }
        }

        deserializer.deserialize_map(ClustersVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn city(id: CityId, name: &str) -> City {
        City {
            id,
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn cluster_map_keeps_document_order() {
        let json = r#"{"clusters":{
            "2": [{"id": 3, "name": "c", "latitude": 0.0, "longitude": 0.0}],
            "0": [],
            "10": [{"id": 1, "name": "a", "latitude": 0.0, "longitude": 0.0}]
        }}"#;
        let resp: KMeansResponse = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = resp.clusters.clusters.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["2", "0", "10"]);
        assert!(resp.clusters.clusters[1].cities.is_empty());
        assert_eq!(resp.clusters.clusters[2].cities[0].id, 1);
    }

    #[test]
    fn cluster_assignment_serializes_in_order() {
        let assignment = ClusterAssignment::new(vec![
            Cluster {
                key: "1".to_string(),
                cities: vec![city(7, "g")],
            },
            Cluster {
                key: "0".to_string(),
                cities: vec![],
            },
        ]);
        let text = serde_json::to_string(&assignment).unwrap();
        assert!(text.find("\"1\"").unwrap() < text.find("\"0\"").unwrap());
        let back: ClusterAssignment = serde_json::from_str(&text).unwrap();
        assert_eq!(back, assignment);
    }

    #[test]
    fn cluster_labels_are_one_based() {
        let c = Cluster {
            key: "0".to_string(),
            cities: vec![],
        };
        assert_eq!(c.label(), "1");
        let named = Cluster {
            key: "north".to_string(),
            cities: vec![],
        };
        assert_eq!(named.label(), "north");
    }

    #[test]
    fn request_bodies_match_wire_names() {
        let tsp = TspRequest {
            city_ids: vec![4, 2],
            start_city_id: 4,
        };
        assert_eq!(
            serde_json::to_value(&tsp).unwrap(),
            serde_json::json!({ "city_ids": [4, 2], "start_city_id": 4 })
        );

        let km = KMeansRequest {
            city_ids: vec![1, 2, 3],
            num_clusters: 2,
        };
        assert_eq!(
            serde_json::to_value(&km).unwrap(),
            serde_json::json!({ "city_ids": [1, 2, 3], "num_clusters": 2 })
        );
    }

    #[test]
    fn city_coordinate_uses_lat_lon() {
        let c = City {
            id: 1,
            name: "Quito".to_string(),
            latitude: -0.18,
            longitude: -78.47,
        };
        assert_eq!(c.coordinate(), GeoCoordinate::new(-0.18, -78.47));
    }
}

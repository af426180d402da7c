//! Result text shown in the panel after a computation.

use routing::{Algorithm, City, ClusterAssignment, ServiceError};

pub fn route_summary(title: &str, path: &[City], total_distance: f64) -> String {
    format!(
        "{title} computed successfully!<br>Total distance: {total_distance:.2} km<br>Path: {}",
        join_names(path, " → ")
    )
}

pub fn cluster_summary(assignment: &ClusterAssignment) -> String {
    let mut out = String::from("Clusters computed successfully!<br><br>");
    for cluster in &assignment.clusters {
        out.push_str(&format!(
            "<strong>Cluster {}:</strong> {}<br>",
            cluster.label(),
            join_names(&cluster.cities, ", ")
        ));
    }
    out
}

/// Service-reported errors are shown verbatim; anything else names the action.
pub fn failure_message(algorithm: Algorithm, err: &ServiceError) -> String {
    if err.is_service_reported() {
        format!("Error: {err}")
    } else {
        format!("Error computing {}: {err}", action_name(algorithm))
    }
}

pub fn action_name(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Dijkstra => "route",
        Algorithm::Tsp => "TSP",
        Algorithm::KMeans => "K-means",
    }
}

/// Strips the panel markup for terminal output.
pub fn to_plain_text(html: &str) -> String {
    let text = html.replace("<br>", "\n");
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn join_names(cities: &[City], sep: &str) -> String {
    cities
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use routing::Cluster;

    fn city(id: i64, name: &str) -> City {
        City {
            id,
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn route_summary_formats_distance_and_path() {
        let text = route_summary("Route", &[city(1, "Lisbon"), city(2, "Madrid")], 10000.0);
        assert_eq!(
            text,
            "Route computed successfully!<br>Total distance: 10000.00 km<br>Path: Lisbon → Madrid"
        );
    }

    #[test]
    fn cluster_summary_lists_clusters_in_order() {
        let assignment = ClusterAssignment::new(vec![
            Cluster {
                key: "1".to_string(),
                cities: vec![city(1, "a"), city(2, "b")],
            },
            Cluster {
                key: "0".to_string(),
                cities: vec![city(3, "c")],
            },
        ]);
        assert_eq!(
            cluster_summary(&assignment),
            "Clusters computed successfully!<br><br>\
             <strong>Cluster 2:</strong> a, b<br>\
             <strong>Cluster 1:</strong> c<br>"
        );
    }

    #[test]
    fn failure_messages_by_class() {
        let service = ServiceError::Service {
            status: 404,
            message: "Path not found".to_string(),
        };
        assert_eq!(failure_message(Algorithm::Dijkstra, &service), "Error: Path not found");

        let transport = ServiceError::Transport("connection refused".to_string());
        assert_eq!(
            failure_message(Algorithm::Tsp, &transport),
            "Error computing TSP: connection refused"
        );

        let decode = ServiceError::Decode("expected value".to_string());
        assert_eq!(
            failure_message(Algorithm::KMeans, &decode),
            "Error computing K-means: invalid response: expected value"
        );
    }

    #[test]
    fn plain_text_strips_markup() {
        assert_eq!(
            to_plain_text("Done!<br><strong>Cluster 1:</strong> a<br>"),
            "Done!\nCluster 1: a\n"
        );
    }
}

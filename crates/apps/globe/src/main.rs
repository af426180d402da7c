use clap::{Parser, Subcommand};
use globe::report::to_plain_text;
use globe::{GlobeConfig, MemoryPanel, ModeController};
use layers::OverlayKind;
use routing::{
    BoundingBox, City, CityId, DijkstraRequest, KMeansRequest, RouteRequest, RoutingClient,
    RoutingService, TspRequest,
};
use scene::World;
use scene::prefabs::spawn_unit_globe;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Routing results as globe overlays")]
struct Args {
    /// Routing service base URL (default: ROUTING_URL or http://127.0.0.1:5000/api/routing)
    #[arg(long)]
    service_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every city known to the service
    Cities,

    /// List cities inside a bounding box
    Search {
        /// Bounding box: minLat,maxLat,minLon,maxLon
        #[arg(long)]
        bbox: String,
    },

    /// Shortest path between two cities
    Dijkstra {
        #[arg(long)]
        start: CityId,
        #[arg(long)]
        end: CityId,
    },

    /// Round trip through the given cities, starting at the first
    Tsp {
        /// Comma-separated city ids
        #[arg(long)]
        cities: String,
    },

    /// Group the given cities into clusters
    Kmeans {
        /// Comma-separated city ids
        #[arg(long)]
        cities: String,

        #[arg(long, default_value_t = 3)]
        clusters: u32,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main(Args::parse()).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn real_main(args: Args) -> Result<(), String> {
    let mut config = GlobeConfig::from_env();
    if let Some(url) = args.service_url {
        config.service_url = url;
    }
    let client = RoutingClient::with_timeout(config.service_url.clone(), config.timeout)
        .map_err(|e| format!("client: {e}"))?;
    info!("routing service at {}", client.base_url());

    if let Command::Search { bbox } = &args.command {
        let bbox = parse_bbox(bbox)?;
        let cities = client
            .search_cities(bbox)
            .await
            .map_err(|e| format!("search: {e}"))?;
        print_cities(&cities);
        return Ok(());
    }

    let mut world = World::new();
    spawn_unit_globe(&mut world);
    let mut controller = ModeController::with_config(world, MemoryPanel::new(), &config);

    controller
        .load_cities(&client)
        .await
        .map_err(|_| to_plain_text(&controller.panel().result))?;

    let request = match args.command {
        Command::Cities => {
            print_cities(controller.cities());
            return Ok(());
        }
        Command::Search { .. } => return Ok(()),
        Command::Dijkstra { start, end } => RouteRequest::Dijkstra(DijkstraRequest {
            start_city_id: start,
            end_city_id: end,
        }),
        Command::Tsp { cities } => {
            let city_ids = parse_ids(&cities)?;
            let start_city_id = city_ids.first().copied().unwrap_or_default();
            RouteRequest::Tsp(TspRequest {
                city_ids,
                start_city_id,
            })
        }
        Command::Kmeans { cities, clusters } => RouteRequest::KMeans(KMeansRequest {
            city_ids: parse_ids(&cities)?,
            num_clusters: clusters,
        }),
    };

    controller.switch_mode(request.algorithm());
    let outcome = controller.compute(&client, request).await;

    let text = to_plain_text(&controller.panel().result);
    if outcome.is_err() || text.starts_with("Error") {
        return Err(text);
    }
    println!("{text}");
    println!(
        "overlays: {} arcs, {} markers ({} drawables in scene)",
        controller.registry().count(OverlayKind::Arc),
        controller.registry().count(OverlayKind::Marker),
        controller.scene().len()
    );
    Ok(())
}

fn print_cities(cities: &[City]) {
    for city in cities {
        println!(
            "{:>6}  {:<24} {:>9.4} {:>9.4}",
            city.id, city.name, city.latitude, city.longitude
        );
    }
    println!("{} cities", cities.len());
}

fn parse_ids(s: &str) -> Result<Vec<CityId>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.parse().map_err(|_| format!("invalid city id: {p}")))
        .collect()
}

fn parse_bbox(s: &str) -> Result<BoundingBox, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| "bbox must be minLat,maxLat,minLon,maxLon".to_string())?;
    if parts.len() != 4 {
        return Err("bbox must be minLat,maxLat,minLon,maxLon".to_string());
    }
    Ok(BoundingBox {
        min_lat: parts[0],
        max_lat: parts[1],
        min_lon: parts[2],
        max_lon: parts[3],
    })
}

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use metro_server::cache::{CacheConfig, RouteCache};
use metro_server::network::load_from_path;
use metro_server::planner::EstimateConfig;
use metro_server::web::{AppState, create_router};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file of connections: station1,station2,line,distance
    #[arg(long, env = "METRO_NETWORK", default_value = "metro.csv")]
    network: PathBuf,

    /// Address to listen on
    #[arg(long, env = "METRO_ADDR", default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// How long a planned route stays cached
    #[arg(long, env = "METRO_CACHE_TTL_SECS", default_value_t = 600)]
    cache_ttl_secs: u64,

    /// Maximum number of cached routes
    #[arg(long, env = "METRO_CACHE_CAPACITY", default_value_t = 10_000)]
    cache_capacity: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_server=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let (graph, report) = match load_from_path(&args.network) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(error = %e, "Failed to load network");
            return ExitCode::FAILURE;
        }
    };
    if graph.is_empty() {
        warn!(path = %args.network.display(), "Network has no usable connections");
    }
    info!(
        stations = graph.station_count(),
        connections = graph.connection_count(),
        skipped = report.skipped,
        "Network ready"
    );

    let cache = RouteCache::new(&CacheConfig {
        ttl: Duration::from_secs(args.cache_ttl_secs),
        max_capacity: args.cache_capacity,
    });
    let state = AppState::new(graph, cache, EstimateConfig::default());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(args.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %args.addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!("Metro route planner listening on http://{}", args.addr);
    info!("  GET /health");
    info!("  GET /shortest_path?source=..&destination=..");
    info!("  GET /min_exchanges?source=..&destination=..");
    info!("  GET /api/stations?q=..&limit=..");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

use std::error::Error;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_planner::config::{AppConfig, EstimatorChoice};
use metro_planner::directions::{
    DirectionsClient, DirectionsConfig, Estimator, MockEstimator, SpeedModel,
};
use metro_planner::network::{
    BENGALURU_LINES, StationRegistry, load_stations, load_transit_pairs,
};
use metro_planner::planner::PlannerConfig;
use metro_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().inspect_err(|e| error!(error = %e, "Bad configuration"))?;
    let planner_config = PlannerConfig::default();

    // Dataset problems, including an empty station table, are fatal.
    let stations = match &config.stations_csv {
        Some(path) => load_stations(path, BENGALURU_LINES),
        None => {
            info!("Using built-in Bengaluru station table");
            StationRegistry::bengaluru(BENGALURU_LINES)
        }
    }
    .inspect_err(|e| error!(error = %e, "Failed to load stations"))?;
    let transit = load_transit_pairs(&config.pairs_csv)
        .inspect_err(|e| error!(error = %e, "Failed to load metro routes"))?;

    let estimator = match config.estimator {
        EstimatorChoice::Directions { api_key } => {
            let directions_config = DirectionsConfig::new(api_key)
                .with_max_concurrent(planner_config.max_concurrent_legs + 1)
                .with_timeout(planner_config.leg_timeout_secs);
            Estimator::Directions(DirectionsClient::new(directions_config)?)
        }
        EstimatorChoice::Mock => {
            info!("Using offline straight-line travel estimates");
            Estimator::Mock(MockEstimator::straight_line(SpeedModel::default()))
        }
    };

    let state = AppState::new(estimator, stations, transit, planner_config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Metro route planner listening");
    info!("  GET  /health          - Health check");
    info!("  POST /routes/find     - Find routes between two points");
    info!("  GET  /stations/:name  - Look up a station");

    axum::serve(listener, app).await?;
    Ok(())
}

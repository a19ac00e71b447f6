use clap::Parser;
use geocode_relay::config::Config;
use tracing_subscriber::EnvFilter;

/// geocode-relay — Mapbox place search relay
///
/// Serves `GET /{query}`, forwards the search (plus any query-string
/// parameters) to the Mapbox geocoding API, and returns the result with
/// `city` / `state` derived on every feature.
///
/// Examples:
///   API_KEY=pk.xxx geocode-relay
///   geocode-relay --port 8080 --api-key pk.xxx
#[derive(Parser)]
#[command(name = "geocode-relay", version, about, long_about = None)]
struct Cli {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    #[command(flatten)]
    config: Config,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    if cli.config.api_key.is_empty() {
        tracing::warn!("API_KEY is not set; the provider will reject every search");
    }

    if let Err(e) = geocode_relay::server::start(&cli.host, cli.port, &cli.config).await {
        tracing::error!(error = %e, host = %cli.host, port = cli.port, "server error");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("geocode_relay=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

//! Company registry API server.
//!
//! Start the server with:
//! ```bash
//! COMPANY_API_PORT=8080 cargo run -p company-api
//! ```

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use company_api::config::{DEFAULT_HOST, DEFAULT_PORT};
use company_api::{serve, ApiConfig, AppState};

/// Company registry - in-memory companies and employees over HTTP
#[derive(Parser, Debug)]
#[command(name = "company-api")]
#[command(version, about, long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "COMPANY_API_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind to
    #[arg(short, long, env = "COMPANY_API_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Allowed CORS origins, comma separated ("*" allows any)
    #[arg(
        long,
        env = "COMPANY_API_CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    cors_origins: Vec<String>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "company_api=info,company_store=info,tower_http=warn",
            1 => "company_api=debug,company_store=debug,tower_http=debug",
            2 => "company_api=trace,company_store=trace,tower_http=trace",
            _ => "trace",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Local overrides first, then a plain .env
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    fmt().with_env_filter(filter).with_target(false).init();

    let config = ApiConfig::new(args.host, args.port).with_cors_origins(args.cors_origins);
    let state = AppState::new(config.clone());

    tracing::info!(address = %config.bind_address(), "Starting company registry");
    serve(config, state).await?;
    tracing::info!("Server stopped");

    Ok(())
}

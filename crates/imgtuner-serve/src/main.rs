//! Binary entry point for the image-tuning HTTP service.

use std::path::PathBuf;

use clap::Parser;
use imgtuner_serve::TempStore;
use imgtuner_serve::routes;

/// Minimal image-tuning HTTP service.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "IMGTUNER_BIND", default_value = "0.0.0.0:3000")]
    bind: String,

    /// Directory for request-scoped temporary uploads.
    #[arg(long, env = "IMGTUNER_TEMP_DIR", default_value = "tmp_uploads")]
    temp_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    log::info!("temp uploads under {}", args.temp_dir.display());
    let app = routes::router(TempStore::new(args.temp_dir));

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    log::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

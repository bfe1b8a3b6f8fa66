use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use odata_openapi_convert::{edmx_to_openapi, edmx_to_openapi_with_annotations};
use odata_openapi_util::get_by_path;

/// Convert an OData EDMX v2 metadata document into an OpenAPI 3.0 description.
#[derive(Parser, Debug)]
#[command(name = "odata-openapi", version, about)]
struct Args {
    /// Input path to the EDMX v2 metadata document
    input: PathBuf,

    /// External annotations document merged into the metadata before conversion
    #[arg(long)]
    annotations: Option<PathBuf>,

    /// Output path for the OpenAPI JSON (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// CLI entry point
fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let edmx = fs::read_to_string(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    let openapi = match &args.annotations {
        Some(path) => {
            let annotations = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            edmx_to_openapi_with_annotations(&annotations, &edmx)?
        }
        None => edmx_to_openapi(&edmx)?,
    };
    log_service_title(&openapi);

    match &args.output {
        Some(path) => fs::write(path, &openapi).with_context(|| format!("write {}", path.display()))?,
        None => println!("{openapi}"),
    }
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn log_service_title(openapi: &str) {
    let Ok(document) = serde_json::from_str::<serde_json::Value>(openapi) else {
        return;
    };
    if let Ok(title) = get_by_path(&document, "/info/title")
        && let Some(title) = title.as_str()
    {
        tracing::info!(title, "conversion complete");
    }
}

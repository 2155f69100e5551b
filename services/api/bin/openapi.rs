//! Writes the skill service's OpenAPI document.
//!
//! Usage: `openapi [OUTPUT]`, defaulting to `openapi.json`.

use jester_api::router::ApiDoc;
use std::path::PathBuf;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("openapi.json"));

    let spec_json = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(&output, spec_json)?;
    println!("Wrote {}", output.display());
    Ok(())
}

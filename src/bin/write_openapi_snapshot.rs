// src/bin/write_openapi_snapshot.rs
use anyhow::{Context, Result};
use std::{env, path::PathBuf};

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path: PathBuf = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os("OPENAPI_SNAPSHOT_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH));

    codercat_server::presentation::http::openapi::write_openapi_snapshot(&output_path)
        .with_context(|| format!("writing {}", output_path.display()))?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}

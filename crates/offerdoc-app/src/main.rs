use std::path::PathBuf;

use eyre::Result;

use offerdoc_app::config;
use offerdoc_app::download::DirectoryDownloads;
use offerdoc_app::session::{EditorSession, SessionOptions};
use offerdoc_app::surface::PreviewSurface;
use offerdoc_core::models::FormFieldSet;

const USAGE: &str = "usage: offerdoc <form.json> [output-dir]";

const PREVIEW_FILE: &str = "preview.html";

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = config::load_or_init_config()?;
    offerdoc_app::logging::init(config.log_format);

    let mut args = std::env::args().skip(1);
    let form_path = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| eyre::eyre!(USAGE))?;
    let output_dir = args
        .next()
        .map(PathBuf::from)
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let json = std::fs::read_to_string(&form_path)
        .map_err(|e| eyre::eyre!("failed to read form at {}: {e}", form_path.display()))?;
    let form = FormFieldSet::from_json(&json)?;

    let loader = config.backend.loader();
    let mut session = EditorSession::start(
        SessionOptions::from_config(&config),
        loader.as_ref(),
        PreviewSurface::full(),
        DirectoryDownloads::new(&output_dir),
    )?;
    session.set_fields(form);

    std::fs::create_dir_all(&output_dir)?;
    let preview_path = output_dir.join(PREVIEW_FILE);
    std::fs::write(&preview_path, preview_page(&session.surface().to_html()))?;
    tracing::info!(path = %preview_path.display(), "preview written");

    let result = session.export();
    for notice in session.take_notices() {
        eprintln!("{notice}");
    }
    result?;

    Ok(())
}

fn preview_page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>offerdoc preview</title></head>\n<body>\n{body}</body>\n</html>\n"
    )
}

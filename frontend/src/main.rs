mod app;
mod components;
mod config;
mod dom;
mod logging;

use anyhow::{Context, Result};
use app::App;
use tracing::error;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    if let Err(error) = mount() {
        error!(error = ?error, "Failed to start the roster");
    }
}

fn mount() -> Result<()> {
    let root = web_sys::window()
        .context("no window")?
        .document()
        .context("no document")?
        .get_element_by_id(config::ROOT_ID)
        .with_context(|| format!("missing #{} element", config::ROOT_ID))?;

    yew::Renderer::<App>::with_root(root).render();

    Ok(())
}

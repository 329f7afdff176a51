// browser binding for the angelic photo site behavior
//
// reads the page, builds the controllers from angelic-common and wires them to dom events.
// runs once, on module start
use gloo_console::error as console_error;
use tracing::Level;
use wasm_bindgen::prelude::*;

use angelic_common::{contract::CONFIG_ID, read_config};

pub mod dom;
pub mod runtime;
pub mod scheduler;
pub mod wiring;

use dom::WebPage;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    start().map_err(|err| JsValue::from_str(&format!("{err:#}")))
}

pub fn start() -> anyhow::Result<()> {
    let page = WebPage::new()?;

    let inline = page.by_id(CONFIG_ID).and_then(|el| el.0.text_content());
    let config = read_config(inline.as_deref());

    if let Err(err) = dioxus_logger::init(Level::from(config.log_level)) {
        console_error!(format!("failed to init logger: {err}"));
    }

    // the runtime keeps itself alive through its listeners
    wiring::wire(page, &config)?;

    Ok(())
}

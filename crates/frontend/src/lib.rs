pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;

use std::str::FromStr;
use wasm_bindgen::prelude::wasm_bindgen;

/// Build-time log level (`MAID_LOG_LEVEL=info trunk build`).
const LOG_LEVEL_OVERRIDE: Option<&str> = option_env!("MAID_LOG_LEVEL");

/// Level name as accepted by `log`, case-insensitive; `Debug` when unset or
/// unrecognised.
fn log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|s| log::Level::from_str(s.trim()).ok())
        .unwrap_or(log::Level::Debug)
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log_level(LOG_LEVEL_OVERRIDE));
    console_error_panic_hook::set_once();

    log::info!("maid dashboard starting, api at {}", shared::api_utils::api_base());
    leptos::mount::mount_to_body(app::App);
}

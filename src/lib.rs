// ============================================================================
// MOG ADMIN - CONSOLA ADMINISTRATIVA (YEW + WASM)
// ============================================================================
// - Components: vistas Yew (sin lógica de red)
// - Hooks: estado de cada vista + orquestación de servicios
// - ViewModels: preparación pura de datos para gráficos y listas
// - Services: SOLO comunicación con los backends y localStorage
// - Models: estructuras compartidas con los backends
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod context;
pub mod hooks;
pub mod components;
pub mod utils;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::components::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 MOG Admin - Yew + WASM");
    log::debug!(
        "🔧 Backends: principal={} analítica={}",
        CONFIG.main_backend_url,
        CONFIG.analytics_backend_url
    );

    yew::Renderer::<App>::new().render();
    Ok(())
}

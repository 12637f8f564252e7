// ============================================================================
// HBNB HEADER - Login/logout del header de las páginas estáticas (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: DOM del header y formulario de login
// - ViewModels: HeaderView (render declarativo) + HeaderAuthController
// - Services: autenticación simulada, navegación, notificaciones
// - State: sesión persistida en localStorage
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App (un solo hilo en WASM)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 HBnB header - Rust + WASM");

    let app = App::new()?;
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Equivale a DOMContentLoaded en un <script> normal
    dom::on_dom_ready(|| {
        APP.with(|app_cell| {
            if let Some(ref app) = *app_cell.borrow() {
                if let Err(e) = app.start() {
                    log::error!("❌ Error inicializando header: {:?}", e);
                }
            }
        });
    })
}

/// Re-aplicar el estado de sesión al header (llamable desde JavaScript)
#[wasm_bindgen]
pub fn refresh_header() -> Result<(), JsValue> {
    with_app(|app| app.controller().refresh_header().map_err(JsValue::from))
}

/// Cerrar sesión y volver al inicio (llamable desde JavaScript)
#[wasm_bindgen]
pub fn logout() -> Result<(), JsValue> {
    with_app(|app| app.controller().logout().map_err(JsValue::from))
}

fn with_app<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce(&App) -> Result<(), JsValue>,
{
    APP.with(|app_cell| match *app_cell.borrow() {
        Some(ref app) => f(app),
        None => {
            log::warn!("⚠️ App no está inicializada");
            Err(JsValue::from_str("App not initialized"))
        }
    })
}

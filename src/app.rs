// ============================================================================
// APP - Arranque: construye el controlador con las dependencias del navegador
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::dom::on_storage_change;
use crate::error::StorageError;
use crate::services::{AlertNotifier, BrowserNavigator, StaticAuthenticator};
use crate::utils::{KeyValueStore, LocalStorageStore, MemoryStore};
use crate::viewmodels::HeaderAuthController;
use crate::views::{bind_login_form, DomHeader};

/// Aplicación principal
pub struct App {
    controller: HeaderAuthController,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let store: Rc<dyn KeyValueStore> = match LocalStorageStore::new() {
            Ok(store) => Rc::new(store),
            Err(StorageError::Unavailable) => {
                // p.ej. modo privado con storage bloqueado: la sesión solo dura la página
                log::warn!("⚠️ [APP] localStorage no disponible, usando almacén en memoria");
                Rc::new(MemoryStore::new())
            }
            Err(e) => return Err(e.into()),
        };

        let config = CONFIG.clone();
        let authenticator = StaticAuthenticator::from_config(&config.auth_config);
        let controller = HeaderAuthController::new(
            store,
            Rc::new(DomHeader),
            Rc::new(BrowserNavigator),
            Rc::new(AlertNotifier),
            Rc::new(authenticator),
            config,
        );

        Ok(Self { controller })
    }

    pub fn controller(&self) -> &HeaderAuthController {
        &self.controller
    }

    /// Refrescar header, conectar el formulario y el listener de `storage`
    pub fn start(&self) -> Result<(), JsValue> {
        self.controller.refresh_header()?;
        bind_login_form(&self.controller)?;

        let controller = self.controller.clone();
        on_storage_change(move |key| {
            if let Err(e) = controller.handle_storage_change(key.as_deref()) {
                log::error!("❌ [APP] Error sincronizando header entre pestañas: {}", e);
            }
        })?;

        log::info!("✅ [APP] Header inicializado");
        Ok(())
    }
}

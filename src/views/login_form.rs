// ============================================================================
// LOGIN FORM - Envío del formulario `login-form` (login.html)
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{get_element_by_id, input_value, on_submit_prevent_default};
use crate::utils::{EMAIL_INPUT_ID, LOGIN_FORM_ID, PASSWORD_INPUT_ID};
use crate::viewmodels::HeaderAuthController;

/// Conectar el formulario de login si la página lo tiene.
/// Devuelve `false` en páginas sin formulario.
pub fn bind_login_form(controller: &HeaderAuthController) -> Result<bool, JsValue> {
    let Some(form) = get_element_by_id(LOGIN_FORM_ID) else {
        return Ok(false);
    };

    let controller = controller.clone();
    on_submit_prevent_default(&form, move || {
        let email = input_value(EMAIL_INPUT_ID);
        let password = input_value(PASSWORD_INPUT_ID);
        if let Err(e) = controller.handle_login_submit(&email, &password) {
            log::warn!("🔐 [AUTH] Login rechazado: {}", e);
        }
    })?;

    log::info!("📝 [AUTH] Formulario de login conectado");
    Ok(true)
}

// ============================================================================
// NAVEGACIÓN Y NOTIFICACIONES - Efectos del navegador detrás de traits
// ============================================================================

use crate::error::HeaderError;

/// Redirección de página
pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), HeaderError>;
}

/// Notificación bloqueante al usuario
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.location.href = url`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), HeaderError> {
        let window = web_sys::window().ok_or_else(|| HeaderError::Dom("No window".to_string()))?;
        log::info!("➡️ [NAV] Redirigiendo a {}", url);
        window.location().set_href(url)?;
        Ok(())
    }
}

/// `window.alert(message)`
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    log::warn!("⚠️ [NAV] alert() falló: {}", message);
                }
            }
            None => log::warn!("⚠️ [NAV] Sin window para mostrar: {}", message),
        }
    }
}

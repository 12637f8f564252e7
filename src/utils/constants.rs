// ============================================================================
// CONSTANTES - Claves de localStorage e IDs del DOM
// ============================================================================
// El markup de las páginas estáticas define `login-link`, `.nav-actions`
// y el formulario `login-form`. Los demás nodos los crea el controlador.
// ============================================================================

/// Clave del flag de sesión ("true" o ausente)
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";

/// Clave del email del usuario logueado
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Valor guardado en `isLoggedIn` tras un login correcto
pub const LOGGED_IN_VALUE: &str = "true";

pub const LOGIN_LINK_ID: &str = "login-link";
pub const LOGOUT_BUTTON_ID: &str = "logout-button";
pub const WELCOME_MESSAGE_ID: &str = "welcome-message";
pub const NAV_ACTIONS_SELECTOR: &str = "header .nav-actions";

pub const LOGIN_FORM_ID: &str = "login-form";
pub const EMAIL_INPUT_ID: &str = "email";
pub const PASSWORD_INPUT_ID: &str = "password";

/// Clase del botón de logout (reutiliza el estilo del link de login)
pub const LOGOUT_BUTTON_CLASS: &str = "login-button";
pub const WELCOME_MESSAGE_CLASS: &str = "welcome-message";
pub const LOGOUT_LABEL: &str = "Logout";

/// `display` usado para mostrar los elementos del header
pub const DISPLAY_VISIBLE: &str = "inline-block";
pub const DISPLAY_HIDDEN: &str = "none";

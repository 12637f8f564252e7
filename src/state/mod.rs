// ============================================================================
// STATE MODULE - Estado de sesión persistido
// ============================================================================

pub mod auth_state;

pub use auth_state::*;

// ============================================================================
// AUTH STATE - Sesión persistida en el almacén clave/valor
// ============================================================================

use crate::error::StorageError;
use crate::utils::{KeyValueStore, IS_LOGGED_IN_KEY, LOGGED_IN_VALUE, USER_EMAIL_KEY};

/// Estado de autenticación leído de `isLoggedIn` / `userEmail`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSession {
    pub logged_in: bool,
    pub email: Option<String>,
}

impl AuthSession {
    /// Sesión iniciada con el email dado
    pub fn logged_in(email: &str) -> Self {
        Self {
            logged_in: true,
            email: Some(email.to_string()).filter(|e| !e.is_empty()),
        }
    }

    /// Leer sesión del almacén. Solo `"true"` cuenta como logueado.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let logged_in = store.get(IS_LOGGED_IN_KEY)?.as_deref() == Some(LOGGED_IN_VALUE);
        let email = store.get(USER_EMAIL_KEY)?.filter(|e| !e.is_empty());
        Ok(Self { logged_in, email })
    }

    /// Persistir flag y email
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        if !self.logged_in {
            return Self::clear(store);
        }
        store.set(IS_LOGGED_IN_KEY, LOGGED_IN_VALUE)?;
        match &self.email {
            Some(email) => store.set(USER_EMAIL_KEY, email),
            None => store.remove(USER_EMAIL_KEY),
        }
    }

    /// Logout - eliminar ambas claves
    pub fn clear(store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.remove(IS_LOGGED_IN_KEY)?;
        store.remove(USER_EMAIL_KEY)
    }

    /// Email visible en el header (solo con sesión iniciada)
    pub fn display_email(&self) -> Option<&str> {
        if self.logged_in {
            self.email.as_deref()
        } else {
            None
        }
    }
}

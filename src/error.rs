// ============================================================================
// ERRORES - Tipos de error del header y del login
// ============================================================================

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,
    #[error("error leyendo '{0}' de localStorage")]
    Read(String),
    #[error("error guardando '{0}' en localStorage")]
    Write(String),
    #[error("error eliminando '{0}' de localStorage")]
    Remove(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeaderError {
    #[error("no se encontró la región 'header .nav-actions'")]
    MissingNavActions,
    #[error("error del DOM: {0}")]
    Dom(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<JsValue> for HeaderError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("email y contraseña son obligatorios")]
    MissingFields,
    #[error("email o contraseña incorrectos")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<HeaderError> for JsValue {
    fn from(err: HeaderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<AuthError> for JsValue {
    fn from(err: AuthError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<StorageError> for JsValue {
    fn from(err: StorageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_converts_into_header_and_auth_errors() {
        let header: HeaderError = StorageError::Unavailable.into();
        assert_eq!(header, HeaderError::Storage(StorageError::Unavailable));
        assert_eq!(header.to_string(), "localStorage no disponible");

        let auth: AuthError = StorageError::Write("userEmail".into()).into();
        assert_eq!(auth.to_string(), "error guardando 'userEmail' en localStorage");
    }
}

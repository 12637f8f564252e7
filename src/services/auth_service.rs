use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::models::Credentials;

/// Verificación de credenciales
pub trait Authenticator {
    fn verify(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Login simulado contra un par fijo email/contraseña.
/// Placeholder: no hay llamada de red, ni hash, ni token.
#[derive(Clone, Debug)]
pub struct StaticAuthenticator {
    email: String,
    password: String,
}

impl StaticAuthenticator {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.demo_email, &config.demo_password)
    }
}

impl Authenticator for StaticAuthenticator {
    fn verify(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingFields);
        }
        if credentials.email == self.email && credentials.password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> StaticAuthenticator {
        StaticAuthenticator::from_config(&AuthConfig::default())
    }

    #[test]
    fn test_demo_credentials_accepted() {
        let creds = Credentials::new("test@example.com", "password123");
        assert_eq!(authenticator().verify(&creds), Ok(()));
    }

    #[test]
    fn test_wrong_pairs_rejected() {
        for (email, password) in [
            ("test@example.com", "password124"),
            ("other@example.com", "password123"),
            ("TEST@example.com", "password123"),
        ] {
            let creds = Credentials::new(email, password);
            assert_eq!(authenticator().verify(&creds), Err(AuthError::InvalidCredentials));
        }
    }

    #[test]
    fn test_blank_fields_rejected_before_comparison() {
        let creds = Credentials::new("", "password123");
        assert_eq!(authenticator().verify(&creds), Err(AuthError::MissingFields));
    }
}

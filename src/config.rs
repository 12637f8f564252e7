use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub home_page: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub auth_config: AuthConfig,
    pub messages: MessagesConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            home_page: "index.html".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            auth_config: AuthConfig::default(),
            messages: MessagesConfig::default(),
        }
    }
}

/// Credenciales de demo: el login es simulado, no hay backend detrás
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub demo_email: String,
    pub demo_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_email: "test@example.com".to_string(),
            demo_password: "password123".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    pub login_success: String,
    pub login_failure: String,
    pub missing_fields: String,
    pub welcome_prefix: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            login_success: "Connexion réussie !".to_string(),
            login_failure: "Email ou mot de passe incorrect.".to_string(),
            missing_fields: "Veuillez remplir tous les champs.".to_string(),
            welcome_prefix: "Welcome".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            home_page: option_env!("HOME_PAGE")
                .map(str::to_string)
                .unwrap_or(defaults.home_page),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            auth_config: AuthConfig {
                demo_email: option_env!("DEMO_EMAIL")
                    .map(str::to_string)
                    .unwrap_or(defaults.auth_config.demo_email),
                demo_password: option_env!("DEMO_PASSWORD")
                    .map(str::to_string)
                    .unwrap_or(defaults.auth_config.demo_password),
            },
            messages: MessagesConfig {
                login_success: option_env!("MSG_LOGIN_SUCCESS")
                    .map(str::to_string)
                    .unwrap_or(defaults.messages.login_success),
                login_failure: option_env!("MSG_LOGIN_FAILURE")
                    .map(str::to_string)
                    .unwrap_or(defaults.messages.login_failure),
                missing_fields: option_env!("MSG_MISSING_FIELDS")
                    .map(str::to_string)
                    .unwrap_or(defaults.messages.missing_fields),
                welcome_prefix: option_env!("MSG_WELCOME_PREFIX")
                    .map(str::to_string)
                    .unwrap_or(defaults.messages.welcome_prefix),
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm-logger; valores desconocidos caen en Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Texto del mensaje de bienvenida
    pub fn welcome_text(&self, email: &str) -> String {
        format!("{} {}", self.messages.welcome_prefix, email)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

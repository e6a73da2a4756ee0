use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_LANDING_ROUTE, DEFAULT_MAX_REDIRECTS, DEFAULT_MOUNT_POINT_ID};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Id do elemento onde a aplicação é montada
    pub mount_point_id: String,
    /// Rota canônica para onde `/` redireciona
    pub landing_route: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub router: RouterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Quantos redirecionamentos encadeados uma navegação pode seguir
    pub max_redirects: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_point_id: DEFAULT_MOUNT_POINT_ID.to_string(),
            landing_route: DEFAULT_LANDING_ROUTE.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            router: RouterConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carrega a configuração das variáveis de ambiente em tempo de compilação
    pub fn from_env() -> Self {
        Self {
            mount_point_id: option_env!("MOUNT_POINT_ID")
                .unwrap_or(DEFAULT_MOUNT_POINT_ID).to_string(),
            landing_route: option_env!("LANDING_ROUTE")
                .unwrap_or(DEFAULT_LANDING_ROUTE).to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            router: RouterConfig {
                max_redirects: option_env!("MAX_REDIRECTS")
                    .unwrap_or("10").parse().unwrap_or(DEFAULT_MAX_REDIRECTS),
            },
        }
    }

    /// Verifica se o logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nível de log configurado; valores desconhecidos caem em `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuração global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

use thiserror::Error;

use crate::models::ViewKey;

/// Tabela de rotas rejeitada na construção
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("nome de rota duplicado: {0}")]
    DuplicateRouteName(String),

    #[error("caminho '{path}' repetido entre rotas irmãs")]
    DuplicateSiblingPath { path: String },

    #[error("padrão de rota inválido '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("redirecionamento inválido em '{path}': {reason}")]
    InvalidRedirect { path: String, reason: String },
}

/// Falha ao carregar um módulo de view
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("nenhum carregador registrado para a view {0}")]
    NotRegistered(ViewKey),

    #[error("falha ao carregar a view {view}: {reason}")]
    Failed { view: ViewKey, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("nenhuma rota casa com '{0}'")]
    UnmatchedRoute(String),

    #[error("rota com nome '{0}' não existe ou exige parâmetros")]
    UnknownRouteName(String),

    #[error("redirecionamentos em excesso a partir de '{0}'")]
    RedirectLoop(String),

    #[error(transparent)]
    ModuleLoad(#[from] LoadError),

    #[error("navegação para '{0}' foi substituída por uma mais recente")]
    Superseded(String),

    #[error("navegação duplicada para '{0}'")]
    Duplicated(String),

    #[error("erro no histórico: {0}")]
    History(String),
}

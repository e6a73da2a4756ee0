// ============================================================================
// ROUTE - Entidades da tabela de rotas
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::constants::META_CATEGORIA;

/// Identificador de um módulo de view carregado sob demanda
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKey {
    LayoutResponsivo,
    Roteamento,
    MenuLateral,
    Checkout,
    NaoEncontrada,
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewKey::LayoutResponsivo => "LayoutResponsivo",
            ViewKey::Roteamento => "Roteamento",
            ViewKey::MenuLateral => "MenuLateral",
            ViewKey::Checkout => "Checkout",
            ViewKey::NaoEncontrada => "NaoEncontrada",
        };
        f.write_str(name)
    }
}

/// Metadados arbitrários anexados a uma rota (ex: `categoria`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta(BTreeMap<String, String>);

impl RouteMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn categoria(&self) -> Option<&str> {
        self.get(META_CATEGORIA)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Combina com os metadados de uma rota filha; a filha prevalece
    pub fn merged_with(&self, child: &RouteMeta) -> RouteMeta {
        let mut merged = self.0.clone();
        merged.extend(child.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        RouteMeta(merged)
    }
}

/// O que uma rota faz quando casa: renderiza uma view ou redireciona
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewKey),
    Redirect(String),
}

/// Entrada da tabela de rotas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub name: Option<String>,
    pub target: RouteTarget,
    pub children: Vec<Route>,
    pub meta: RouteMeta,
}

impl Route {
    /// Rota que renderiza uma view
    pub fn view(path: impl Into<String>, view: ViewKey) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::View(view),
            children: Vec::new(),
            meta: RouteMeta::new(),
        }
    }

    /// Rota que apenas encaminha para outro caminho
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(to.into()),
            children: Vec::new(),
            meta: RouteMeta::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key, value);
        self
    }

    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }

    pub fn component(&self) -> Option<ViewKey> {
        match self.target {
            RouteTarget::View(key) => Some(key),
            RouteTarget::Redirect(_) => None,
        }
    }
}

/// Resultado da resolução de um caminho contra a tabela
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Caminho normalizado (sem query nem hash)
    pub path: String,
    pub name: Option<String>,
    pub view: ViewKey,
    /// Metadados combinados do pai até a folha
    pub meta: RouteMeta,
    pub params: BTreeMap<String, String>,
    /// Pares da query string, na ordem em que apareceram
    pub query: Vec<(String, String)>,
    pub hash: Option<String>,
    /// Padrões completos das rotas casadas, do pai até a folha
    pub matched: Vec<String>,
    pub redirected_from: Option<String>,
}

impl RouteMatch {
    pub fn categoria(&self) -> Option<&str> {
        self.meta.categoria()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Caminho completo como aparece na barra de endereço
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if !self.query.is_empty() {
            let query: Vec<String> = self
                .query
                .iter()
                .map(|(k, v)| if v.is_empty() { k.clone() } else { format!("{}={}", k, v) })
                .collect();
            full.push('?');
            full.push_str(&query.join("&"));
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }
}

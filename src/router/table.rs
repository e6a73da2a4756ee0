// ============================================================================
// ROUTE TABLE - Tabela imutável de rotas, validada e compilada na construção
// ============================================================================

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use crate::models::{Route, RouteMatch, RouteMeta, RouteTarget};
use crate::router::error::{RouteTableError, RouterError};
use crate::router::matcher::{join_paths, Location, PathPattern};

/// Resultado de `resolve`: ou renderiza, ou encaminha para outro caminho
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(RouteMatch),
    Redirect { from: String, to: String },
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    pattern: PathPattern,
    name: Option<String>,
    target: RouteTarget,
    meta: RouteMeta,
    chain: Vec<String>,
}

impl CompiledRoute {
    fn depth(&self) -> usize {
        self.chain.len()
    }

    fn outranks(&self, other: &CompiledRoute) -> bool {
        match self.pattern.specificity_cmp(&other.pattern) {
            Ordering::Greater => true,
            Ordering::Less => false,
            // Empate: a rota filha vence o pai; depois vale a ordem da tabela
            Ordering::Equal => self.depth() > other.depth(),
        }
    }
}

/// Tabela de rotas. Só existe em estado válido e não expõe mutação.
#[derive(Debug, Clone)]
pub struct RouteTable {
    compiled: Vec<CompiledRoute>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let mut compiled = Vec::new();
        let mut names = HashSet::new();
        compile_level(&routes, "/", &RouteMeta::new(), &[], &mut names, &mut compiled)?;

        log::debug!("🗺️ [ROUTER] Tabela compilada com {} rotas", compiled.len());
        Ok(Self { compiled })
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Resolve uma localização (caminho + query + hash) contra a tabela
    pub fn resolve(&self, raw: &str) -> Result<Resolution, RouterError> {
        let location = Location::parse(raw);
        let segments = location.segments();

        let mut best: Option<(&CompiledRoute, BTreeMap<String, String>)> = None;
        for route in &self.compiled {
            let Some(params) = route.pattern.captures(&segments) else {
                continue;
            };
            let replace = match &best {
                Some((current, _)) => route.outranks(current),
                None => true,
            };
            if replace {
                best = Some((route, params));
            }
        }

        let (route, params) = best.ok_or_else(|| RouterError::UnmatchedRoute(location.path.clone()))?;

        match &route.target {
            RouteTarget::Redirect(to) => Ok(Resolution::Redirect {
                from: location.path,
                to: to.clone(),
            }),
            RouteTarget::View(view) => Ok(Resolution::Render(RouteMatch {
                path: location.path,
                name: route.name.clone(),
                view: *view,
                meta: route.meta.clone(),
                params,
                query: location.query,
                hash: location.hash,
                matched: route.chain.clone(),
                redirected_from: None,
            })),
        }
    }

    /// Caminho de uma rota nomeada sem parâmetros
    pub fn path_for(&self, name: &str) -> Result<String, RouterError> {
        self.compiled
            .iter()
            .find(|r| r.name.as_deref() == Some(name) && r.pattern.is_static())
            .map(|r| r.pattern.as_str().to_string())
            .ok_or_else(|| RouterError::UnknownRouteName(name.to_string()))
    }
}

fn compile_level(
    routes: &[Route],
    parent_path: &str,
    parent_meta: &RouteMeta,
    parent_chain: &[String],
    names: &mut HashSet<String>,
    out: &mut Vec<CompiledRoute>,
) -> Result<(), RouteTableError> {
    let mut siblings = HashSet::new();

    for route in routes {
        let full_path = join_paths(parent_path, &route.path);
        if !siblings.insert(full_path.to_lowercase()) {
            return Err(RouteTableError::DuplicateSiblingPath { path: full_path });
        }

        if let Some(name) = &route.name {
            if !names.insert(name.clone()) {
                return Err(RouteTableError::DuplicateRouteName(name.clone()));
            }
        }

        if let RouteTarget::Redirect(to) = &route.target {
            if !to.starts_with('/') {
                return Err(RouteTableError::InvalidRedirect {
                    path: full_path,
                    reason: "destino precisa ser um caminho absoluto".to_string(),
                });
            }
            if !route.children.is_empty() {
                return Err(RouteTableError::InvalidRedirect {
                    path: full_path,
                    reason: "redirecionamento não pode ter rotas filhas".to_string(),
                });
            }
        }

        let pattern = PathPattern::parse(&full_path)?;
        let meta = parent_meta.merged_with(&route.meta);
        let mut chain = parent_chain.to_vec();
        chain.push(pattern.as_str().to_string());

        // Filhos entram antes do pai para que, em empate, a ordem também os favoreça
        compile_level(&route.children, &full_path, &meta, &chain, names, out)?;

        out.push(CompiledRoute {
            pattern,
            name: route.name.clone(),
            target: route.target.clone(),
            meta,
            chain,
        });
    }

    Ok(())
}

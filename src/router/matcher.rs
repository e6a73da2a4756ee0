// ============================================================================
// MATCHER - Padrões de caminho, normalização de URL e especificidade
// ============================================================================

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::router::error::RouteTableError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Guardado em minúsculas; comparação ignora caixa
    Static(String),
    Param(String),
    /// Consome zero ou mais segmentos restantes
    CatchAll(String),
}

impl Segment {
    fn rank(&self) -> u8 {
        match self {
            Segment::Static(_) => 3,
            Segment::Param(_) => 2,
            Segment::CatchAll(_) => 1,
        }
    }
}

/// Padrão de caminho compilado: `/estatico/:param/:resto*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, RouteTableError> {
        let invalid = |reason: &str| RouteTableError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !pattern.starts_with('/') {
            return Err(invalid("precisa começar com '/'"));
        }

        let raw: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(raw.len());

        for (i, part) in raw.iter().enumerate() {
            if let Some(param) = part.strip_prefix(':') {
                let (name, catch_all) = match param.strip_suffix('*') {
                    Some(name) => (name, true),
                    None => (param, false),
                };
                if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return Err(invalid("nome de parâmetro inválido"));
                }
                if catch_all {
                    if i + 1 != raw.len() {
                        return Err(invalid("curinga só pode ser o último segmento"));
                    }
                    segments.push(Segment::CatchAll(name.to_string()));
                } else {
                    segments.push(Segment::Param(name.to_string()));
                }
            } else if part.contains(':') || part.contains('*') {
                return Err(invalid("segmento estático com ':' ou '*'"));
            } else {
                segments.push(Segment::Static(part.to_lowercase()));
            }
        }

        Ok(Self {
            source: normalize_path(pattern),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Padrão sem parâmetros (serve para navegação por nome)
    pub fn is_static(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, Segment::Static(_)))
    }

    /// Tenta casar os segmentos de um caminho; devolve os parâmetros capturados
    pub fn captures(&self, path: &[&str]) -> Option<BTreeMap<String, String>> {
        let mut params = BTreeMap::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    let actual = path.get(i)?;
                    if actual.to_lowercase() != *expected {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let actual = path.get(i)?;
                    params.insert(name.clone(), (*actual).to_string());
                }
                Segment::CatchAll(name) => {
                    let rest = path.get(i..).unwrap_or(&[]);
                    params.insert(name.clone(), rest.join("/"));
                    return Some(params);
                }
            }
        }

        (path.len() == self.segments.len()).then_some(params)
    }

    /// Compara especificidade: estático > parâmetro > curinga, segmento a
    /// segmento. Um curinga sobrando nunca torna o padrão mais específico.
    pub fn specificity_cmp(&self, other: &PathPattern) -> Ordering {
        for (a, b) in self.segments.iter().zip(other.segments.iter()) {
            match a.rank().cmp(&b.rank()) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        let common = self.segments.len().min(other.segments.len());
        match (self.segments.get(common), other.segments.get(common)) {
            (Some(Segment::CatchAll(_)), None) => Ordering::Less,
            (None, Some(Segment::CatchAll(_))) => Ordering::Greater,
            _ => self.segments.len().cmp(&other.segments.len()),
        }
    }
}

/// Junta o caminho do pai com o de um filho: vazio herda o pai, absoluto
/// ignora o pai, relativo vira `pai/filho`
pub fn join_paths(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        normalize_path(child)
    } else if child.is_empty() {
        normalize_path(parent)
    } else {
        normalize_path(&format!("{}/{}", parent.trim_end_matches('/'), child))
    }
}

/// Remove barras repetidas e a barra final; caminho vazio vira `/`
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Localização decomposta em caminho, query e hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub hash: Option<String>,
}

impl Location {
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (rest, Vec::new()),
        };

        Self {
            path: normalize_path(path),
            query,
            hash: hash.filter(|h| !h.is_empty()),
        }
    }

    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(p: &str) -> PathPattern {
        PathPattern::parse(p).unwrap()
    }

    #[test]
    fn test_static_match_ignores_case_and_trailing_slash() {
        let p = pattern("/roteamento/bermudas");
        let loc = Location::parse("/Roteamento/BERMUDAS/");
        assert!(p.captures(&loc.segments()).is_some());
        assert!(p.captures(&Location::parse("/roteamento").segments()).is_none());
    }

    #[test]
    fn test_param_and_catch_all_capture() {
        let produto = pattern("/produto/:id");
        let params = produto.captures(&["produto", "cam-001"]).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("cam-001"));
        assert!(produto.captures(&["produto"]).is_none());

        let resto = pattern("/:caminho*");
        let params = resto.captures(&["nao", "existe"]).unwrap();
        assert_eq!(params.get("caminho").map(String::as_str), Some("nao/existe"));
        assert_eq!(resto.captures(&[]).unwrap().get("caminho").map(String::as_str), Some(""));
    }

    #[test]
    fn test_specificity_ordering() {
        let estatico = pattern("/roteamento/bolsas");
        let param = pattern("/roteamento/:slug");
        let curinga = pattern("/:caminho*");

        assert_eq!(estatico.specificity_cmp(&param), Ordering::Greater);
        assert_eq!(param.specificity_cmp(&curinga), Ordering::Greater);
        assert_eq!(pattern("/checkout").specificity_cmp(&pattern("/checkout/:resto*")), Ordering::Greater);
    }

    #[test]
    fn test_invalid_patterns_rejected() {
        assert!(PathPattern::parse("sem-barra").is_err());
        assert!(PathPattern::parse("/:resto*/depois").is_err());
        assert!(PathPattern::parse("/:").is_err());
        assert!(PathPattern::parse("/a*b").is_err());
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(join_paths("/roteamento", ""), "/roteamento");
        assert_eq!(join_paths("/roteamento", "camisetas"), "/roteamento/camisetas");
        assert_eq!(join_paths("/roteamento/", "/checkout"), "/checkout");
        assert_eq!(join_paths("/", ""), "/");
    }

    #[test]
    fn test_location_parse() {
        let loc = Location::parse("//roteamento//bolsas/?ordem=preco&promo#topo");
        assert_eq!(loc.path, "/roteamento/bolsas");
        assert_eq!(loc.query, vec![("ordem".into(), "preco".into()), ("promo".into(), String::new())]);
        assert_eq!(loc.hash.as_deref(), Some("topo"));

        assert_eq!(Location::parse("").path, "/");
        assert_eq!(Location::parse("/#").hash, None);
    }
}

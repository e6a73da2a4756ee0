use serde::{Deserialize, Serialize};

/// Categorias de produto da vitrine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Categoria {
    Camiseta,
    Bermuda,
    Bolsa,
    Pochete,
    Moletom,
}

impl Categoria {
    pub fn slug(&self) -> &'static str {
        match self {
            Categoria::Camiseta => "camiseta",
            Categoria::Bermuda => "bermuda",
            Categoria::Bolsa => "bolsa",
            Categoria::Pochete => "pochete",
            Categoria::Moletom => "moletom",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "camiseta" => Some(Categoria::Camiseta),
            "bermuda" => Some(Categoria::Bermuda),
            "bolsa" => Some(Categoria::Bolsa),
            "pochete" => Some(Categoria::Pochete),
            "moletom" => Some(Categoria::Moletom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    pub id: String,
    pub nome: String,
    pub categoria: Categoria,
    pub preco_centavos: u32,
}

impl Produto {
    /// Preço formatado em reais (ex: "R$ 59,90")
    pub fn preco_formatado(&self) -> String {
        format!("R$ {},{:02}", self.preco_centavos / 100, self.preco_centavos % 100)
    }
}

/// Catálogo embutido no binário, desserializado sob demanda pelas views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogo {
    produtos: Vec<Produto>,
}

impl Catalogo {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let produtos: Vec<Produto> = serde_json::from_str(json)?;
        Ok(Self { produtos })
    }

    /// Catálogo padrão da vitrine
    pub fn embutido() -> Result<Self, serde_json::Error> {
        Self::from_json(include_str!("../../assets/catalogo.json"))
    }

    pub fn todos(&self) -> &[Produto] {
        &self.produtos
    }

    /// Filtra pelo slug vindo do metadado `categoria`; `todas` ou slug
    /// desconhecido devolvem o catálogo inteiro
    pub fn filtrar(&self, slug: Option<&str>) -> Vec<&Produto> {
        match slug.and_then(Categoria::from_slug) {
            Some(categoria) => self.produtos.iter().filter(|p| p.categoria == categoria).collect(),
            None => self.produtos.iter().collect(),
        }
    }
}

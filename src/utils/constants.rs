/// Elemento do documento onde a árvore renderizada é anexada
pub const DEFAULT_MOUNT_POINT_ID: &str = "app";

/// Seção para onde a raiz `/` encaminha o cliente
pub const DEFAULT_LANDING_ROUTE: &str = "/layout-responsivo";

/// Limite de redirecionamentos encadeados antes de desistir da navegação
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Atributo que marca links interceptados pelo roteador
pub const ROUTER_LINK_ATTR: &str = "data-link";

/// Chave de metadado que carrega a categoria de produtos da rota
pub const META_CATEGORIA: &str = "categoria";

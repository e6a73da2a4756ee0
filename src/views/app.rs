// ============================================================================
// APP VIEW - Casca da aplicação: menu de navegação + view ativa
// ============================================================================

use crate::router::ActiveView;

/// Entradas do menu principal: (nome da rota, rótulo)
pub const MENU: [(&str, &str); 4] = [
    ("LayoutResponsivo", "Layout Responsivo"),
    ("TodasCategorias", "Roteamento"),
    ("MenuLateral", "Menu Lateral"),
    ("Checkout", "Checkout"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub href: String,
    pub label: &'static str,
}

impl MenuLink {
    fn is_active(&self, path: &str) -> bool {
        path == self.href || path.starts_with(&format!("{}/", self.href))
    }
}

/// Renderizar a árvore completa que vai para o ponto de montagem
pub fn render_app(menu: &[MenuLink], active: Option<&ActiveView>) -> String {
    let path = active.map(|a| a.route.path.as_str()).unwrap_or_default();

    let links: String = menu
        .iter()
        .map(|link| {
            let class = if link.is_active(path) { "menu-link ativo" } else { "menu-link" };
            format!(r#"<a href="{}" class="{}" data-link>{}</a>"#, link.href, class, link.label)
        })
        .collect();

    let conteudo = active.map(ActiveView::render).unwrap_or_default();

    format!(
        r#"<div class="app"><header class="topo"><nav class="menu-principal">{}</nav></header><main class="conteudo">{}</main></div>"#,
        links, conteudo
    )
}

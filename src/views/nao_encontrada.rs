use crate::models::RouteMatch;
use crate::views::escape_html;

/// Destino da rota curinga
pub fn render_nao_encontrada(route: &RouteMatch) -> String {
    format!(
        r#"<section class="nao-encontrada"><h2>Página não encontrada</h2><p>/{}</p><a href="/layout-responsivo" data-link>Voltar à vitrine</a></section>"#,
        escape_html(route.param("caminho").unwrap_or_default())
    )
}

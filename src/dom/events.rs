// ============================================================================
// EVENT HANDLING - Eventos do navegador encaminhados ao roteador
// ============================================================================
// Os dois listeners são globais para a vida da aplicação e registrados uma
// única vez na inicialização, por isso closure.forget() não acumula nada.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent, PopStateEvent, Window};

use crate::dom::browser::history_position;
use crate::router::{Navigation, Router, RouterError};
use crate::utils::constants::ROUTER_LINK_ATTR;

/// Voltar/avançar do navegador. Hash editado também dispara `popstate`,
/// com state nulo; o roteador trata como entrada nova.
pub fn on_popstate(window: &Window, router: Router) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |event: PopStateEvent| {
        let position = history_position(event.state());
        let router = router.clone();
        spawn_local(async move {
            report(router.handle_pop(position).await);
        });
    }) as Box<dyn FnMut(PopStateEvent)>);

    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Delegação de cliques em `a[data-link]` dentro do ponto de montagem.
/// Cliques modificados (nova aba, etc.) seguem o comportamento padrão.
pub fn on_link_click(root: &Element, router: Router) -> Result<(), JsValue> {
    let selector = format!("a[{}]", ROUTER_LINK_ATTR);
    let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
        if event.default_prevented()
            || event.button() != 0
            || event.ctrl_key()
            || event.meta_key()
            || event.shift_key()
            || event.alt_key()
        {
            return;
        }

        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = target.closest(&selector) else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };

        event.prevent_default();
        let router = router.clone();
        spawn_local(async move {
            report(router.push(href).await);
        });
    }) as Box<dyn FnMut(MouseEvent)>);

    root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Falha de carga de módulo não é recuperada: vai para o console e a view
/// anterior continua na tela. O resto já foi logado pelo roteador.
fn report(result: Result<Navigation, RouterError>) {
    if let Err(RouterError::ModuleLoad(e)) = result {
        log::error!("❌ [APP] {}", e);
    }
}

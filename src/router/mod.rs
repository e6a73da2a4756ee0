// ============================================================================
// ROUTER - Resolução de rotas, histórico, carga de views e scroll
// ============================================================================
// Fluxo de uma navegação:
//   Idle -> Resolving -> (resolve + redirecionamentos) -> carga da view
//        -> commit (histórico, rota atual, scroll) -> Idle
// Só a navegação mais recente faz commit; as anteriores terminam com
// `RouterError::Superseded` sem tocar no histórico nem na tela.
// ============================================================================

pub mod error;
pub mod history;
pub mod loader;
pub mod matcher;
pub mod scroll;
pub mod table;

pub use error::{LoadError, RouteTableError, RouterError};
pub use history::{History, HistoryState, MemoryHistory};
pub use loader::{ViewLoader, ViewModule};
pub use scroll::{scroll_behavior, NavigationKind, NavigationPosition, ScrollPosition, ScrollStore, Viewport};
pub use table::{Resolution, RouteTable};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::RouterConfig;
use crate::models::RouteMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Idle,
    Resolving,
}

/// Destino de uma navegação: caminho literal ou nome de rota
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Path(String),
    Named(String),
}

impl From<&str> for NavigationTarget {
    fn from(path: &str) -> Self {
        NavigationTarget::Path(path.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(path: String) -> Self {
        NavigationTarget::Path(path)
    }
}

/// View ativa: rota resolvida + módulo já carregado
#[derive(Debug, Clone)]
pub struct ActiveView {
    pub route: RouteMatch,
    pub module: ViewModule,
    pub position: usize,
}

impl ActiveView {
    pub fn render(&self) -> String {
        self.module.render(&self.route)
    }
}

/// Resultado de uma navegação concluída
#[derive(Debug, Clone)]
pub struct Navigation {
    pub route: RouteMatch,
    pub kind: NavigationKind,
    pub position: usize,
    pub scroll: ScrollPosition,
}

type Subscriber = Box<dyn Fn()>;

struct RouterInner {
    table: RouteTable,
    history: Rc<dyn History>,
    viewport: Rc<dyn Viewport>,
    loader: ViewLoader,
    config: RouterConfig,
    state: Cell<RouterState>,
    generation: Cell<u64>,
    committed_position: Cell<usize>,
    scroll: RefCell<ScrollStore>,
    current: Rc<RefCell<Option<ActiveView>>>,
    subscribers: RefCell<Vec<Subscriber>>,
}

/// Handle barato de clonar; todos os clones compartilham o mesmo roteador
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

impl Router {
    pub fn new(
        table: RouteTable,
        history: Rc<dyn History>,
        viewport: Rc<dyn Viewport>,
        loader: ViewLoader,
        config: RouterConfig,
    ) -> Self {
        let position = history.position().unwrap_or(0);
        Self {
            inner: Rc::new(RouterInner {
                table,
                history,
                viewport,
                loader,
                config,
                state: Cell::new(RouterState::Idle),
                generation: Cell::new(0),
                committed_position: Cell::new(position),
                scroll: RefCell::new(ScrollStore::new()),
                current: Rc::new(RefCell::new(None)),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.inner.table
    }

    pub fn state(&self) -> RouterState {
        self.inner.state.get()
    }

    pub fn current_route(&self) -> Option<RouteMatch> {
        self.inner.current.borrow().as_ref().map(|a| a.route.clone())
    }

    /// Handle somente-leitura da view ativa
    pub fn current_view(&self) -> Rc<RefCell<Option<ActiveView>>> {
        self.inner.current.clone()
    }

    /// Chamado a cada commit, antes de aplicar o scroll
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.inner.subscribers.borrow_mut().push(Box::new(callback));
    }

    pub fn resolve(&self, location: &str) -> Result<Resolution, RouterError> {
        self.inner.table.resolve(location)
    }

    /// Caminho de uma rota nomeada
    pub fn href(&self, name: &str) -> Result<String, RouterError> {
        self.inner.table.path_for(name)
    }

    /// Navegação inicial: resolve a URL atual e substitui a entrada
    pub async fn start(&self) -> Result<Navigation, RouterError> {
        let location = self.inner.history.location();
        self.navigate(location, NavigationKind::Replace).await
    }

    pub async fn push(&self, target: impl Into<NavigationTarget>) -> Result<Navigation, RouterError> {
        self.navigate(target, NavigationKind::Push).await
    }

    /// Voltar/avançar: o host já trocou a entrada, só falta renderizar.
    /// Uma entrada sem posição foi empilhada pelo próprio navegador (hash):
    /// ela vira a entrada seguinte à atual e é carimbada antes de navegar.
    pub async fn handle_pop(&self, position: Option<usize>) -> Result<Navigation, RouterError> {
        let location = self.inner.history.location();
        let position = match position {
            Some(position) => position,
            None => {
                let committed = self.inner.committed_position.get();
                self.inner.history.replace(&location, committed + 1)?;
                self.inner.scroll.borrow_mut().discard_after(committed);
                log::debug!("🏷️ [ROUTER] Entrada sem posição: {} vira {}", location, committed + 1);
                committed + 1
            }
        };
        self.navigate(location, NavigationKind::Pop { position }).await
    }

    pub async fn navigate(
        &self,
        target: impl Into<NavigationTarget>,
        kind: NavigationKind,
    ) -> Result<Navigation, RouterError> {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        self.set_state(RouterState::Resolving);

        let result = self.run(target.into(), kind, generation).await;

        if self.is_latest(generation) {
            self.set_state(RouterState::Idle);
        }
        if let Err(e) = &result {
            match e {
                RouterError::Superseded(_) | RouterError::Duplicated(_) => log::debug!("⏭️ [ROUTER] {}", e),
                _ => log::warn!("⚠️ [ROUTER] Navegação falhou: {}", e),
            }
        }
        result
    }

    async fn run(
        &self,
        target: NavigationTarget,
        kind: NavigationKind,
        generation: u64,
    ) -> Result<Navigation, RouterError> {
        let raw = match target {
            NavigationTarget::Path(path) => path,
            NavigationTarget::Named(name) => self.href(&name)?,
        };

        let route = self.follow_redirects(&raw)?;
        let location = route.full_path();

        if kind == NavigationKind::Push {
            let current = self.current_route().map(|r| r.full_path());
            if current.as_deref() == Some(location.as_str()) {
                return Err(RouterError::Duplicated(location));
            }
        }

        // Offset da página que está sendo deixada, lido antes da suspensão
        let leaving = self.inner.committed_position.get();
        let leaving_offset = self.inner.viewport.offset();

        let module = self.inner.loader.load(route.view).await?;

        if !self.is_latest(generation) {
            return Err(RouterError::Superseded(location));
        }

        let history = &self.inner.history;
        let redirected = route.redirected_from.is_some();
        let position = match kind {
            NavigationKind::Pop { position } => {
                if redirected {
                    history.replace(&location, position)?;
                }
                position
            }
            NavigationKind::Push if !redirected => {
                history.push(&location, leaving + 1)?;
                leaving + 1
            }
            NavigationKind::Push | NavigationKind::Replace => {
                history.replace(&location, leaving)?;
                leaving
            }
        };

        let scroll = {
            let mut store = self.inner.scroll.borrow_mut();
            if kind == NavigationKind::Push && position != leaving {
                store.discard_after(leaving);
            }
            if position != leaving {
                store.save(leaving, leaving_offset);
            }
            let saved = match kind {
                NavigationKind::Pop { .. } => store.get(position),
                _ => None,
            };
            scroll_behavior(
                kind,
                &NavigationPosition {
                    target: location.clone(),
                    saved,
                },
            )
        };

        self.inner.committed_position.set(position);
        *self.inner.current.borrow_mut() = Some(ActiveView {
            route: route.clone(),
            module,
            position,
        });
        // Borrow já liberado: subscribers leem a view ativa
        for subscriber in self.inner.subscribers.borrow().iter() {
            subscriber();
        }
        self.inner.viewport.scroll_to(scroll);

        log::info!(
            "🧭 [ROUTER] {:?} -> {} (view {}, entrada {}, scroll {})",
            kind,
            location,
            route.view,
            position,
            scroll.top
        );

        Ok(Navigation {
            route,
            kind,
            position,
            scroll,
        })
    }

    fn follow_redirects(&self, raw: &str) -> Result<RouteMatch, RouterError> {
        let mut location = raw.to_string();
        let mut first_from: Option<String> = None;

        for _ in 0..=self.inner.config.max_redirects {
            match self.inner.table.resolve(&location)? {
                Resolution::Render(mut route) => {
                    route.redirected_from = first_from;
                    return Ok(route);
                }
                Resolution::Redirect { from, to } => {
                    log::info!("↪️ [ROUTER] Redirecionando {} -> {}", from, to);
                    first_from.get_or_insert(from);
                    location = to;
                }
            }
        }

        Err(RouterError::RedirectLoop(raw.to_string()))
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.inner.generation.get() == generation
    }

    fn set_state(&self, state: RouterState) {
        if self.inner.state.get() != state {
            log::debug!("🔁 [ROUTER] {:?} -> {:?}", self.inner.state.get(), state);
            self.inner.state.set(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Route, ViewKey};
    use crate::testing::{test_loader, MemoryViewport};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;

    fn router_with(routes: Vec<Route>, initial: &str) -> (Router, Rc<MemoryHistory>, Rc<MemoryViewport>) {
        let history = Rc::new(MemoryHistory::new(initial));
        let viewport = Rc::new(MemoryViewport::default());
        let router = Router::new(
            RouteTable::new(routes).unwrap(),
            history.clone(),
            viewport.clone(),
            test_loader(),
            RouterConfig::default(),
        );
        (router, history, viewport)
    }

    fn loja_routes() -> Vec<Route> {
        vec![
            Route::redirect("/", "/layout-responsivo"),
            Route::view("/layout-responsivo", ViewKey::LayoutResponsivo).named("LayoutResponsivo"),
            Route::view("/menu-lateral", ViewKey::MenuLateral).named("MenuLateral"),
            Route::view("/checkout", ViewKey::Checkout).named("Checkout"),
        ]
    }

    #[test]
    fn test_start_replaces_redirected_root() {
        let (router, history, _) = router_with(loja_routes(), "/");

        let nav = block_on(router.start()).unwrap();
        assert_eq!(nav.route.path, "/layout-responsivo");
        assert_eq!(nav.route.redirected_from.as_deref(), Some("/"));
        assert_eq!(history.entries(), vec!["/layout-responsivo"]);
        assert_eq!(router.state(), RouterState::Idle);
    }

    #[test]
    fn test_back_restores_saved_offset_and_push_resets() {
        let (router, history, viewport) = router_with(loja_routes(), "/checkout");
        block_on(router.start()).unwrap();

        viewport.user_scrolls(420.0);
        let nav = block_on(router.push("/menu-lateral")).unwrap();
        assert_eq!(nav.scroll, ScrollPosition::TOP);
        assert_eq!(viewport.offset().top, 0.0);

        let position = history.back().unwrap();
        let nav = block_on(router.handle_pop(position)).unwrap();
        assert_eq!(nav.route.path, "/checkout");
        assert_eq!(nav.scroll.top, 420.0);
        assert_eq!(viewport.offset().top, 420.0);
    }

    #[test]
    fn test_forward_without_saved_offset_goes_to_top() {
        // Entradas herdadas de uma sessão anterior: nenhum offset registrado
        let history = Rc::new(MemoryHistory::new("/checkout"));
        history.replace("/checkout", 0).unwrap();
        history.push("/menu-lateral", 1).unwrap();
        history.back().unwrap();

        let viewport = Rc::new(MemoryViewport::default());
        let router = Router::new(
            RouteTable::new(loja_routes()).unwrap(),
            history.clone(),
            viewport.clone(),
            test_loader(),
            RouterConfig::default(),
        );
        block_on(router.start()).unwrap();
        viewport.user_scrolls(150.0);

        let forward = history.forward().unwrap();
        let nav = block_on(router.handle_pop(forward)).unwrap();
        assert_eq!(nav.route.path, "/menu-lateral");
        assert_eq!(nav.scroll, ScrollPosition { left: 0.0, top: 0.0 });
        assert_eq!(viewport.offset().top, 0.0);
    }

    #[test]
    fn test_leaving_by_pop_saves_offset_for_later_forward() {
        let (router, history, viewport) = router_with(loja_routes(), "/checkout");
        block_on(router.start()).unwrap();
        block_on(router.push("/menu-lateral")).unwrap();
        viewport.user_scrolls(275.0);

        let p = history.back().unwrap();
        block_on(router.handle_pop(p)).unwrap();
        let p = history.forward().unwrap();
        let nav = block_on(router.handle_pop(p)).unwrap();
        assert_eq!(nav.scroll.top, 275.0);
    }

    #[test]
    fn test_named_navigation_and_duplicate_push() {
        let (router, history, _) = router_with(loja_routes(), "/");
        block_on(router.start()).unwrap();

        let nav = block_on(router.push(NavigationTarget::Named("Checkout".to_string()))).unwrap();
        assert_eq!(nav.route.path, "/checkout");

        let err = block_on(router.push("/checkout")).unwrap_err();
        assert_eq!(err, RouterError::Duplicated("/checkout".to_string()));
        assert_eq!(history.len(), 2);
        assert_eq!(router.state(), RouterState::Idle);

        let err = block_on(router.push(NavigationTarget::Named("Inexistente".to_string()))).unwrap_err();
        assert!(matches!(err, RouterError::UnknownRouteName(_)));
    }

    #[test]
    fn test_redirected_push_to_current_location_is_duplicated() {
        let (router, history, viewport) = router_with(loja_routes(), "/layout-responsivo");
        block_on(router.start()).unwrap();
        viewport.user_scrolls(300.0);
        let renders = Rc::new(Cell::new(0));
        let count = renders.clone();
        router.subscribe(move || count.set(count.get() + 1));

        let err = block_on(router.push("/")).unwrap_err();
        assert_eq!(err, RouterError::Duplicated("/layout-responsivo".to_string()));
        assert_eq!(history.entries(), vec!["/layout-responsivo"]);
        assert_eq!(viewport.offset().top, 300.0);
        assert_eq!(renders.get(), 0);
        assert_eq!(router.state(), RouterState::Idle);
    }

    #[test]
    fn test_untracked_entry_becomes_next_position() {
        let (router, history, viewport) = router_with(loja_routes(), "/layout-responsivo");
        block_on(router.start()).unwrap();
        viewport.user_scrolls(500.0);
        block_on(router.push("/checkout")).unwrap();
        viewport.user_scrolls(120.0);

        // Âncora dentro do checkout: o navegador empilha sem state
        history.push_untracked("/checkout#pagamento");
        let nav = block_on(router.handle_pop(history.position())).unwrap();
        assert_eq!(nav.position, 2);
        assert_eq!(nav.route.hash.as_deref(), Some("pagamento"));
        assert_eq!(nav.scroll, ScrollPosition::TOP);
        assert_eq!(history.position(), Some(2));

        // A entrada anterior mantém o offset; a primeira não é confundida
        let p = history.back().unwrap();
        let nav = block_on(router.handle_pop(p)).unwrap();
        assert_eq!(nav.position, 1);
        assert_eq!(nav.scroll.top, 120.0);

        let p = history.back().unwrap();
        assert_eq!(block_on(router.handle_pop(p)).unwrap().scroll.top, 500.0);

        // Próximo push não colide com posições existentes
        let nav = block_on(router.push("/menu-lateral")).unwrap();
        assert_eq!(nav.position, 1);
        assert_eq!(history.entries(), vec!["/layout-responsivo", "/menu-lateral"]);
    }

    #[test]
    fn test_redirect_loop_detected() {
        let (router, history, _) = router_with(
            vec![Route::redirect("/a", "/b"), Route::redirect("/b", "/a")],
            "/a",
        );
        let err = block_on(router.start()).unwrap_err();
        assert_eq!(err, RouterError::RedirectLoop("/a".to_string()));
        assert_eq!(history.entries(), vec!["/a"]);
        assert_eq!(router.state(), RouterState::Idle);
    }

    #[test]
    fn test_unmatched_route_leaves_current_view() {
        let (router, history, _) = router_with(loja_routes(), "/checkout");
        block_on(router.start()).unwrap();

        let err = block_on(router.push("/nao-existe")).unwrap_err();
        assert_eq!(err, RouterError::UnmatchedRoute("/nao-existe".to_string()));
        assert_eq!(router.current_route().unwrap().path, "/checkout");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_module_load_failure_commits_nothing() {
        let history = Rc::new(MemoryHistory::new("/checkout"));
        let mut loader = test_loader();
        loader.register(ViewKey::MenuLateral, || async {
            Err::<ViewModule, _>(LoadError::Failed {
                view: ViewKey::MenuLateral,
                reason: "chunk ausente".to_string(),
            })
        });
        let router = Router::new(
            RouteTable::new(loja_routes()).unwrap(),
            history.clone(),
            Rc::new(MemoryViewport::default()),
            loader,
            RouterConfig::default(),
        );
        block_on(router.start()).unwrap();

        let err = block_on(router.push("/menu-lateral")).unwrap_err();
        assert!(matches!(err, RouterError::ModuleLoad(_)));
        assert_eq!(history.len(), 1);
        assert_eq!(router.current_route().unwrap().path, "/checkout");
        assert_eq!(router.state(), RouterState::Idle);
    }

    #[test]
    fn test_last_navigation_wins() {
        let (tx, rx) = oneshot::channel::<()>();
        let gate = Rc::new(RefCell::new(Some(rx)));

        let history = Rc::new(MemoryHistory::new("/checkout"));
        let mut loader = test_loader();
        loader.register(ViewKey::MenuLateral, move || {
            let rx = gate.borrow_mut().take();
            async move {
                if let Some(rx) = rx {
                    let _ = rx.await;
                }
                Ok(ViewModule::new(ViewKey::MenuLateral, |_| "menu".to_string()))
            }
        });
        let router = Router::new(
            RouteTable::new(loja_routes()).unwrap(),
            history.clone(),
            Rc::new(MemoryViewport::default()),
            loader,
            RouterConfig::default(),
        );
        block_on(router.start()).unwrap();

        let lenta = router.push("/menu-lateral");
        let rapida = async {
            let nav = router.push("/layout-responsivo").await;
            tx.send(()).unwrap();
            nav
        };
        let (lenta, rapida) = block_on(join(lenta, rapida));

        assert_eq!(rapida.unwrap().route.path, "/layout-responsivo");
        assert_eq!(lenta.unwrap_err(), RouterError::Superseded("/menu-lateral".to_string()));
        assert_eq!(history.entries(), vec!["/checkout", "/layout-responsivo"]);
        assert_eq!(router.current_route().unwrap().path, "/layout-responsivo");
        assert_eq!(router.state(), RouterState::Idle);
    }

    #[test]
    fn test_subscribers_run_before_scroll() {
        let (router, _, viewport) = router_with(loja_routes(), "/checkout");
        let rendered = Rc::new(RefCell::new(Vec::new()));

        let view = router.current_view();
        let log = rendered.clone();
        let vp = viewport.clone();
        router.subscribe(move || {
            let path = view.borrow().as_ref().map(|a| a.route.path.clone()).unwrap_or_default();
            log.borrow_mut().push((path, vp.scroll_calls()));
        });

        block_on(router.start()).unwrap();
        assert_eq!(*rendered.borrow(), vec![("/checkout".to_string(), 0)]);
        assert_eq!(viewport.scroll_calls(), 1);
    }
}

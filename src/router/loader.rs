// ============================================================================
// VIEW LOADER - Carga assíncrona de views com memoização por chave
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::models::{RouteMatch, ViewKey};
use crate::router::error::LoadError;

type RenderFn = dyn Fn(&RouteMatch) -> String;

/// Módulo de view pronto para renderizar
#[derive(Clone)]
pub struct ViewModule {
    key: ViewKey,
    render: Rc<RenderFn>,
}

impl ViewModule {
    pub fn new<F>(key: ViewKey, render: F) -> Self
    where
        F: Fn(&RouteMatch) -> String + 'static,
    {
        Self {
            key,
            render: Rc::new(render),
        }
    }

    pub fn key(&self) -> ViewKey {
        self.key
    }

    pub fn render(&self, route: &RouteMatch) -> String {
        (self.render)(route)
    }
}

impl fmt::Debug for ViewModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModule").field("key", &self.key).finish()
    }
}

type LoadFuture = Pin<Box<dyn Future<Output = Result<ViewModule, LoadError>>>>;
type ViewFactory = Rc<dyn Fn() -> LoadFuture>;

/// Mapeia cada view para uma future que produz o módulo. O resultado é
/// guardado após a primeira carga bem-sucedida; falhas não são guardadas.
#[derive(Default)]
pub struct ViewLoader {
    factories: HashMap<ViewKey, ViewFactory>,
    cache: RefCell<HashMap<ViewKey, ViewModule>>,
}

impl ViewLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F, Fut>(&mut self, key: ViewKey, factory: F)
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<ViewModule, LoadError>> + 'static,
    {
        self.factories
            .insert(key, Rc::new(move || Box::pin(factory()) as LoadFuture));
    }

    pub fn is_loaded(&self, key: ViewKey) -> bool {
        self.cache.borrow().contains_key(&key)
    }

    pub async fn load(&self, key: ViewKey) -> Result<ViewModule, LoadError> {
        if let Some(module) = self.cache.borrow().get(&key) {
            return Ok(module.clone());
        }

        let factory = self
            .factories
            .get(&key)
            .cloned()
            .ok_or(LoadError::NotRegistered(key))?;

        log::info!("📦 [LOADER] Carregando view {}...", key);
        let module = factory().await.map_err(|e| {
            log::error!("❌ [LOADER] Falha ao carregar {}: {}", key, e);
            e
        })?;

        self.cache.borrow_mut().insert(key, module.clone());
        log::info!("✅ [LOADER] View {} pronta", key);
        Ok(module)
    }
}

impl fmt::Debug for ViewLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewLoader")
            .field("registered", &self.factories.keys().collect::<Vec<_>>())
            .field("loaded", &self.cache.borrow().keys().copied().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// APP - Casca da aplicação: monta a árvore e instala o roteador
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::dom::{HostDocument, MountPoint};
use crate::error::AppError;
use crate::router::{Navigation, RouteTable, Router, RouterError, ViewLoader};
use crate::routes::app_routes;
use crate::views::{self, app::MENU, render_app, MenuLink};

/// Aplicação montada
pub struct App {
    router: Router,
    mount: Rc<dyn MountPoint>,
}

impl App {
    /// Monta a aplicação com as views da vitrine
    pub fn mount(document: &dyn HostDocument, config: &AppConfig) -> Result<Self, AppError> {
        Self::mount_with(document, config, views::app_loader())
    }

    /// Monta com um carregador de views arbitrário. Sem ponto de montagem
    /// nada é construído nem alterado no host: nem roteador, nem
    /// restauração de scroll, nem render.
    pub fn mount_with(
        document: &dyn HostDocument,
        config: &AppConfig,
        loader: ViewLoader,
    ) -> Result<Self, AppError> {
        let mount = document.mount_point(&config.mount_point_id).ok_or_else(|| {
            log::error!("❌ [APP] Elemento #{} não encontrado", config.mount_point_id);
            AppError::MissingMountPoint(config.mount_point_id.clone())
        })?;

        let table = RouteTable::new(app_routes(&config.landing_route))?;
        let router = Router::new(
            table,
            document.history(),
            document.viewport(),
            loader,
            config.router.clone(),
        );
        let menu = build_menu(&router)?;

        document.take_scroll_control()?;

        let active = router.current_view();
        let target = mount.clone();
        router.subscribe(move || {
            let html = render_app(&menu, active.borrow().as_ref());
            target.replace_content(&html);
        });

        log::info!("🏗️ [APP] Montada em #{}", config.mount_point_id);
        Ok(Self { router, mount })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Elemento encontrado na montagem
    pub fn mount_point(&self) -> &Rc<dyn MountPoint> {
        &self.mount
    }

    /// Primeira navegação, a partir da URL atual do host
    pub async fn start(&self) -> Result<Navigation, RouterError> {
        self.router.start().await
    }
}

fn build_menu(router: &Router) -> Result<Vec<MenuLink>, RouterError> {
    MENU.iter()
        .map(|&(name, label)| {
            Ok(MenuLink {
                href: router.href(name)?,
                label,
            })
        })
        .collect()
}

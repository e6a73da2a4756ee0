// ============================================================================
// DOM MODULE - Ponte entre o navegador e a aplicação
// ============================================================================

pub mod host;
pub mod browser;
pub mod events;

pub use host::{HostDocument, MountPoint};
pub use browser::BrowserDocument;
pub use events::on_popstate;

// Utils compartilhados

pub mod constants;

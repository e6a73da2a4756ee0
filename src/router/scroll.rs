// ============================================================================
// SCROLL - Decisão de restauração de scroll por navegação
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    pub const TOP: ScrollPosition = ScrollPosition { left: 0.0, top: 0.0 };

    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Área rolável do host (a janela, no navegador)
pub trait Viewport {
    fn offset(&self) -> ScrollPosition;

    fn scroll_to(&self, position: ScrollPosition);
}

/// Como a navegação foi disparada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// Nova entrada no histórico (link, navegação programática)
    Push,
    /// Substitui a entrada atual (carga inicial)
    Replace,
    /// Voltar/avançar do navegador; `position` é a entrada de destino
    Pop { position: usize },
}

/// Dados transitórios consumidos pela decisão de scroll
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationPosition {
    pub target: String,
    pub saved: Option<ScrollPosition>,
}

/// Voltar/avançar com posição salva restaura exatamente essa posição;
/// qualquer outro caso volta ao topo
pub fn scroll_behavior(kind: NavigationKind, position: &NavigationPosition) -> ScrollPosition {
    match (kind, position.saved) {
        (NavigationKind::Pop { .. }, Some(saved)) => saved,
        _ => ScrollPosition::TOP,
    }
}

/// Posições de scroll salvas por entrada do histórico
#[derive(Debug, Default)]
pub struct ScrollStore {
    positions: HashMap<usize, ScrollPosition>,
}

impl ScrollStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, entry: usize, position: ScrollPosition) {
        self.positions.insert(entry, position);
    }

    pub fn get(&self, entry: usize) -> Option<ScrollPosition> {
        self.positions.get(&entry).copied()
    }

    /// Um push descarta as entradas à frente; suas posições morrem junto
    pub fn discard_after(&mut self, entry: usize) {
        self.positions.retain(|&k, _| k <= entry);
    }
}

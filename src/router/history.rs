// ============================================================================
// HISTORY - Abstração sobre a pilha de histórico do host
// ============================================================================

use std::cell::{Cell, RefCell};

use serde::{Deserialize, Serialize};

use crate::router::error::RouterError;

/// Estado gravado em cada entrada do histórico do navegador
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub position: usize,
}

/// Pilha de histórico endereçável. A posição de cada entrada é atribuída
/// pelo roteador, gravada no state da entrada e usada como chave das
/// posições de scroll salvas.
pub trait History {
    /// Localização atual (caminho + query + hash)
    fn location(&self) -> String;

    /// Posição gravada na entrada atual. `None` para entradas criadas pelo
    /// próprio navegador (carga da página, edição do hash).
    fn position(&self) -> Option<usize>;

    /// Empilha uma entrada nova em `position`, descartando as da frente
    fn push(&self, location: &str, position: usize) -> Result<(), RouterError>;

    /// Reescreve a entrada atual com `location` e `position`
    fn replace(&self, location: &str, position: usize) -> Result<(), RouterError>;
}

#[derive(Debug, Clone)]
struct Entry {
    location: String,
    position: Option<usize>,
}

/// Histórico em memória, para testes e hosts sem navegador
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Vec<Entry>>,
    index: Cell<usize>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: RefCell::new(vec![Entry {
                location: initial.to_string(),
                position: None,
            }]),
            index: Cell::new(0),
        }
    }

    /// Volta uma entrada e devolve o state dela, como o `popstate` faria.
    /// `None` se já está na primeira.
    pub fn back(&self) -> Option<Option<usize>> {
        let index = self.index.get().checked_sub(1)?;
        self.index.set(index);
        Some(self.entries.borrow()[index].position)
    }

    /// Avança uma entrada; `None` se já está na última
    pub fn forward(&self) -> Option<Option<usize>> {
        let index = self.index.get() + 1;
        let entries = self.entries.borrow();
        let entry = entries.get(index)?;
        self.index.set(index);
        Some(entry.position)
    }

    /// Entrada empilhada pelo navegador sem passar pelo roteador (âncora
    /// `#secao`, hash editado na barra de endereço): chega sem state
    pub fn push_untracked(&self, location: &str) {
        let mut entries = self.entries.borrow_mut();
        let next = self.index.get() + 1;
        entries.truncate(next);
        entries.push(Entry {
            location: location.to_string(),
            position: None,
        });
        self.index.set(next);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|e| e.location.clone()).collect()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries.borrow()[self.index.get()].location.clone()
    }

    fn position(&self) -> Option<usize> {
        self.entries.borrow()[self.index.get()].position
    }

    fn push(&self, location: &str, position: usize) -> Result<(), RouterError> {
        let mut entries = self.entries.borrow_mut();
        let next = self.index.get() + 1;
        entries.truncate(next);
        entries.push(Entry {
            location: location.to_string(),
            position: Some(position),
        });
        self.index.set(next);
        Ok(())
    }

    fn replace(&self, location: &str, position: usize) -> Result<(), RouterError> {
        self.entries.borrow_mut()[self.index.get()] = Entry {
            location: location.to_string(),
            position: Some(position),
        };
        Ok(())
    }
}

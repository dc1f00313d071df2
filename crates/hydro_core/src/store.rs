//! Dataset editável com escopo de sessão.
//!
//! O [`SessionStore`] é o dono exclusivo do [`Dataset`] durante a sessão:
//! a camada de apresentação só recebe referências para renderizar. A checagem
//! de papel em [`SessionStore::set`] é feita aqui, independente do gating da
//! UI, já que o papel pode mudar entre um frame e outro.

use tracing::{debug, warn};

use crate::access::Role;
use crate::types::Dataset;

/// Erros do store.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Permissão negada: papel {0} não pode editar o dataset")]
    PermissionDenied(&'static str),
}

/// Holder mutável do dataset da sessão.
///
/// Criado vazio no início da sessão, semeado uma única vez via
/// [`initialize`](SessionStore::initialize) e descartado no fim da sessão.
/// Sem persistência entre sessões.
#[derive(Debug, Default)]
pub struct SessionStore {
    dataset: Dataset,
    initialized: bool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instala o dataset inicial. Idempotente: chamadas seguintes são no-op.
    pub fn initialize(&mut self, seed: Dataset) {
        if self.initialized {
            debug!("Dataset já inicializado, seed ignorado");
            return;
        }
        debug!("Dataset inicializado com {} linhas", seed.len());
        self.dataset = seed;
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Leitura do dataset, disponível para ambos os papéis.
    pub fn get(&self) -> &Dataset {
        &self.dataset
    }

    /// Substitui o dataset inteiro. Exclusivo do papel Technician.
    pub fn set(&mut self, role: Role, new_dataset: Dataset) -> Result<(), StoreError> {
        if role != Role::Technician {
            warn!("Escrita no dataset bloqueada para papel {}", role.label());
            return Err(StoreError::PermissionDenied(role.label()));
        }
        self.dataset = new_dataset;
        self.initialized = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Reading;

    fn dataset(ph: f64) -> Dataset {
        Dataset::new(vec![Reading { ph, ..Default::default() }])
    }

    #[test]
    fn starts_empty_and_uninitialized() {
        let store = SessionStore::new();
        assert!(!store.is_initialized());
        assert!(store.get().is_empty());
    }

    #[test]
    fn initialize_is_idempotent() {
        let mut store = SessionStore::new();
        store.initialize(dataset(7.0));
        store.initialize(dataset(9.9));
        assert_eq!(store.get(), &dataset(7.0));
    }

    #[test]
    fn technician_can_replace_dataset() {
        let mut store = SessionStore::new();
        store.initialize(dataset(7.0));
        store.set(Role::Technician, dataset(8.0)).unwrap();
        assert_eq!(store.get(), &dataset(8.0));
    }

    #[test]
    fn viewer_write_is_denied_and_dataset_unchanged() {
        let mut store = SessionStore::new();
        store.initialize(dataset(7.0));
        let err = store.set(Role::Viewer, dataset(8.0)).unwrap_err();
        assert_eq!(err, StoreError::PermissionDenied("Viewer"));
        assert_eq!(store.get(), &dataset(7.0));
    }

    #[test]
    fn set_counts_as_initialization() {
        // Um set válido também impede que um initialize posterior sobrescreva
        let mut store = SessionStore::new();
        store.set(Role::Technician, dataset(8.0)).unwrap();
        store.initialize(dataset(7.0));
        assert_eq!(store.get(), &dataset(8.0));
    }
}

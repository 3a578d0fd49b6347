use std::sync::Arc;

use tracing::debug;

use shared_database::{AppState, MemoryStore};
use shared_models::doctor::{Doctor, Specialty};
use shared_models::EntityId;

/// Read-only view over the seeded doctor and specialty tables.
pub struct DirectoryService {
    store: Arc<MemoryStore>,
}

impl DirectoryService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    pub fn list_doctors(&self) -> Vec<Doctor> {
        debug!("Listing {} doctors", self.store.doctors().len());
        self.store.doctors().to_vec()
    }

    pub fn list_specialties(&self) -> Vec<Specialty> {
        self.store.specialties().to_vec()
    }

    /// Keeps the order of `ids`; an unknown id leaves a `None` in its slot.
    pub fn resolve(&self, ids: &[EntityId]) -> Vec<Option<Doctor>> {
        ids.iter()
            .map(|id| self.store.find_doctor(*id).cloned())
            .collect()
    }
}

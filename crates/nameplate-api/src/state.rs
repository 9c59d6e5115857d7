use nameplate_core::Naming;
use nameplate_store::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared by every request: the naming rules and the single store
/// connection, which serializes writes.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
    naming: Arc<Naming>,
}

impl AppState {
    pub fn new(store: Store, naming: Naming) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            naming: Arc::new(naming),
        }
    }

    pub fn store(&self) -> &Mutex<Store> {
        &self.store
    }

    pub fn naming(&self) -> &Naming {
        &self.naming
    }
}

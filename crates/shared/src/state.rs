use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    config::{ConnectionPool, SearchMatch},
    utils::DependenciesInject,
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Arc<Mutex<Registry>>,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool, search_match: SearchMatch) -> Self {
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(pool, search_match, &mut registry);

        Self {
            registry: Arc::new(Mutex::new(registry)),
            di_container,
        }
    }
}

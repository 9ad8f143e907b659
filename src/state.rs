use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::ServerConfig;
use crate::counters::Counters;
use crate::query::QueryMode;
use crate::secret::{FileSecret, SecretStore};

/// Shared application state, cloned into every handler closure.
#[derive(Clone)]
pub struct AppState {
    pub counters: Arc<Counters>,
    pub secret: Arc<dyn SecretStore>,
    pub clock: Arc<dyn Clock>,
    pub query_mode: QueryMode,
}

impl AppState {
    /// Fresh counters, the system clock, literal query parsing, and the given
    /// secret store.
    pub fn new(secret: impl SecretStore + 'static) -> Self {
        Self {
            counters: Arc::new(Counters::new()),
            secret: Arc::new(secret),
            clock: Arc::new(SystemClock),
            query_mode: QueryMode::default(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(FileSecret::new(&config.secret_path)).with_query_mode(config.query_mode)
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_query_mode(mut self, mode: QueryMode) -> Self {
        self.query_mode = mode;
        self
    }
}

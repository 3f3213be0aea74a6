use std::sync::Arc;

use orgchart_core::compensation::CompensationManager;
use orgchart_core::employee::EmployeeManager;
use orgchart_core::reporting::{ReportingResolver, ResolverLimits};
use orgchart_core::store::EntityStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Backing store, shared by every manager.
    pub store: Arc<dyn EntityStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub employees: EmployeeManager,
    pub reporting: ReportingResolver,
    pub compensations: CompensationManager,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>, config: ServerConfig) -> Self {
        let limits = ResolverLimits {
            max_nodes: config.reporting_max_nodes,
        };
        Self {
            employees: EmployeeManager::new(Arc::clone(&store)),
            reporting: ReportingResolver::with_limits(Arc::clone(&store), limits),
            compensations: CompensationManager::new(Arc::clone(&store)),
            config: Arc::new(config),
            store,
        }
    }
}

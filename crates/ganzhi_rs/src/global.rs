//! Process-wide engine singleton.

use std::sync::OnceLock;

use ganzhi_config::GanzhiConfig;

use crate::engine::ChartEngine;
use crate::error::ChartError;

static ENGINE: OnceLock<ChartEngine> = OnceLock::new();

/// Initialize the global engine. Fails if already initialized.
pub fn init(config: GanzhiConfig) -> Result<(), ChartError> {
    init_with(ChartEngine::new(config)?)
}

/// Install a prepared engine as the global one.
pub fn init_with(engine: ChartEngine) -> Result<(), ChartError> {
    ENGINE
        .set(engine)
        .map_err(|_| ChartError::AlreadyInitialized)
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

pub(crate) fn engine() -> Result<&'static ChartEngine, ChartError> {
    ENGINE.get().ok_or(ChartError::NotInitialized)
}

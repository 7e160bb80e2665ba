//! Process-wide default engine.

use std::sync::OnceLock;

use crate::engine::ChartEngine;
use crate::error::SizhuError;

static ENGINE: OnceLock<ChartEngine> = OnceLock::new();

/// Install a custom engine. Fails if one is already installed, including
/// the default engine created by an earlier convenience call.
pub fn init(engine: ChartEngine) -> Result<(), SizhuError> {
    ENGINE.set(engine).map_err(|_| SizhuError::AlreadyInitialized)
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

/// The installed engine, or the default one on first use.
pub fn engine() -> &'static ChartEngine {
    ENGINE.get_or_init(ChartEngine::default)
}

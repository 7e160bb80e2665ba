//! Facade error type.

use sizhu_calendar::CalendarError;
use sizhu_config::ConfigError;
use sizhu_ganzhi::GanzhiError;
use sizhu_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SizhuError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Pillar(#[from] GanzhiError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// `init` was called after the global engine was already set.
    #[error("global engine already initialized")]
    AlreadyInitialized,
}

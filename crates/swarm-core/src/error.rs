//! Construction-time errors. A running world has no failure modes.

use thiserror::Error;

use crate::enums::EnemyKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no enemy variants enabled")]
    NoVariants,
    #[error("variant {0} enabled more than once")]
    DuplicateVariant(EnemyKind),
    #[error("spawn interval must be finite and non-negative, got {0}")]
    InvalidSpawnInterval(f64),
    #[error("surface bounds must be finite and positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },
    #[error("{kind}: invalid {field} range [{min}, {max})")]
    InvalidRange {
        kind: EnemyKind,
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{kind}: invalid {field} value {value}")]
    InvalidValue {
        kind: EnemyKind,
        field: &'static str,
        value: f64,
    },
    #[error("{0}: sprite sheet needs at least one frame")]
    InvalidFrameCount(EnemyKind),
    #[error("read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

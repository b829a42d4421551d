//! World configuration.
//!
//! Everything here is fixed once a world is built. Hosts either take
//! `WorldConfig::default()` or load a JSON file where any omitted field
//! falls back to its default.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::*;
use crate::enums::EnemyKind;
use crate::error::ConfigError;
use crate::types::{DVec2, SpriteHandle, ValueRange};

/// Sprite sheet and motion tuning shared by every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Host-resolved sprite sheet.
    pub sprite: SpriteHandle,
    /// Width of one sheet frame in source pixels.
    pub frame_width: f64,
    /// Height of one sheet frame in source pixels.
    pub frame_height: f64,
    /// Number of columns in the sheet.
    pub frame_count: u32,
    /// Time each frame stays on screen.
    pub frame_interval: f64,
    /// Destination size relative to the source frame.
    pub scale: f64,
    /// Leftward drift speed drawn at spawn.
    pub speed: ValueRange,
}

impl VariantConfig {
    fn sheet(
        sprite: u32,
        frame_width: f64,
        frame_height: f64,
        scale: f64,
        speed: ValueRange,
    ) -> Self {
        Self {
            sprite: SpriteHandle(sprite),
            frame_width,
            frame_height,
            frame_count: SPRITE_COLUMNS,
            frame_interval: FRAME_INTERVAL,
            scale,
            speed,
        }
    }

    pub fn crawler() -> Self {
        Self::sheet(
            0,
            CRAWLER_FRAME_WIDTH,
            CRAWLER_FRAME_HEIGHT,
            CRAWLER_SCALE,
            CRAWLER_SPEED,
        )
    }

    pub fn dropper() -> Self {
        Self::sheet(
            1,
            DROPPER_FRAME_WIDTH,
            DROPPER_FRAME_HEIGHT,
            DROPPER_SCALE,
            DROPPER_SPEED,
        )
    }

    pub fn floater() -> Self {
        Self::sheet(
            2,
            FLOATER_FRAME_WIDTH,
            FLOATER_FRAME_HEIGHT,
            FLOATER_SCALE,
            FLOATER_SPEED,
        )
    }

    /// On-surface size of a spawned enemy.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.frame_width * self.scale, self.frame_height * self.scale)
    }

    /// Index of the last sheet column.
    pub fn max_frame(&self) -> u32 {
        self.frame_count.saturating_sub(1)
    }

    fn validate(&self, kind: EnemyKind) -> Result<(), ConfigError> {
        if self.frame_count == 0 {
            return Err(ConfigError::InvalidFrameCount(kind));
        }
        positive(kind, "frame_width", self.frame_width)?;
        positive(kind, "frame_height", self.frame_height)?;
        positive(kind, "scale", self.scale)?;
        if !self.frame_interval.is_finite() || self.frame_interval < 0.0 {
            return Err(ConfigError::InvalidValue {
                kind,
                field: "frame_interval",
                value: self.frame_interval,
            });
        }
        // Droppers hang in place; everything else must drift off the left edge.
        if kind == EnemyKind::Dropper {
            non_negative_range(kind, "speed", self.speed)
        } else {
            positive_range(kind, "speed", self.speed)
        }
    }
}

/// A variant block as written in a config file. Omitted fields keep the
/// variant's own defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VariantOverrides {
    sprite: Option<SpriteHandle>,
    frame_width: Option<f64>,
    frame_height: Option<f64>,
    frame_count: Option<u32>,
    frame_interval: Option<f64>,
    scale: Option<f64>,
    speed: Option<ValueRange>,
}

impl VariantOverrides {
    fn apply(self, base: VariantConfig) -> VariantConfig {
        VariantConfig {
            sprite: self.sprite.unwrap_or(base.sprite),
            frame_width: self.frame_width.unwrap_or(base.frame_width),
            frame_height: self.frame_height.unwrap_or(base.frame_height),
            frame_count: self.frame_count.unwrap_or(base.frame_count),
            frame_interval: self.frame_interval.unwrap_or(base.frame_interval),
            scale: self.scale.unwrap_or(base.scale),
            speed: self.speed.unwrap_or(base.speed),
        }
    }
}

fn crawler_block<'de, D: Deserializer<'de>>(d: D) -> Result<VariantConfig, D::Error> {
    VariantOverrides::deserialize(d).map(|o| o.apply(VariantConfig::crawler()))
}

fn dropper_block<'de, D: Deserializer<'de>>(d: D) -> Result<VariantConfig, D::Error> {
    VariantOverrides::deserialize(d).map(|o| o.apply(VariantConfig::dropper()))
}

fn floater_block<'de, D: Deserializer<'de>>(d: D) -> Result<VariantConfig, D::Error> {
    VariantOverrides::deserialize(d).map(|o| o.apply(VariantConfig::floater()))
}

/// Extra tuning for droppers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropperTuning {
    /// Vertical speed along the thread.
    pub fall_speed: ValueRange,
}

impl Default for DropperTuning {
    fn default() -> Self {
        Self {
            fall_speed: DROPPER_FALL_SPEED,
        }
    }
}

/// Extra tuning for floaters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloaterTuning {
    /// Per-tick vertical bias.
    pub curve: ValueRange,
    /// Phase advance per tick (radians).
    pub phase_step: f64,
    /// Draw opacity.
    pub alpha: f64,
}

impl Default for FloaterTuning {
    fn default() -> Self {
        Self {
            curve: FLOATER_CURVE,
            phase_step: FLOATER_PHASE_STEP,
            alpha: FLOATER_ALPHA,
        }
    }
}

/// Configuration for building a world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// RNG seed. Same seed and same deltas give the same simulation.
    pub seed: u64,
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Time that must be strictly exceeded between spawns.
    pub spawn_interval: f64,
    /// Variants the scheduler picks from, uniformly.
    pub variants: Vec<EnemyKind>,
    #[serde(deserialize_with = "crawler_block")]
    pub crawler: VariantConfig,
    #[serde(deserialize_with = "dropper_block")]
    pub dropper: VariantConfig,
    #[serde(deserialize_with = "floater_block")]
    pub floater: VariantConfig,
    pub dropper_motion: DropperTuning,
    pub floater_motion: FloaterTuning,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            spawn_interval: SPAWN_INTERVAL,
            variants: EnemyKind::ALL.to_vec(),
            crawler: VariantConfig::crawler(),
            dropper: VariantConfig::dropper(),
            floater: VariantConfig::floater(),
            dropper_motion: DropperTuning::default(),
            floater_motion: FloaterTuning::default(),
        }
    }
}

impl WorldConfig {
    /// Default config restricted to the given variants.
    pub fn with_variants(variants: impl IntoIterator<Item = EnemyKind>) -> Self {
        Self {
            variants: variants.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Parse a JSON document. Omitted fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Tuning for one variant.
    pub fn variant(&self, kind: EnemyKind) -> &VariantConfig {
        match kind {
            EnemyKind::GroundCrawler => &self.crawler,
            EnemyKind::Dropper => &self.dropper,
            EnemyKind::Floater => &self.floater,
        }
    }

    /// Reject configurations a world cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if !self.spawn_interval.is_finite() || self.spawn_interval < 0.0 {
            return Err(ConfigError::InvalidSpawnInterval(self.spawn_interval));
        }
        if self.variants.is_empty() {
            return Err(ConfigError::NoVariants);
        }
        let mut seen = HashSet::new();
        for &kind in &self.variants {
            if !seen.insert(kind) {
                return Err(ConfigError::DuplicateVariant(kind));
            }
        }

        for kind in EnemyKind::ALL {
            self.variant(kind).validate(kind)?;
        }

        positive_range(
            EnemyKind::Dropper,
            "fall_speed",
            self.dropper_motion.fall_speed,
        )?;

        let floater = &self.floater_motion;
        if !floater.curve.is_valid() {
            return Err(ConfigError::InvalidRange {
                kind: EnemyKind::Floater,
                field: "curve",
                min: floater.curve.min,
                max: floater.curve.max,
            });
        }
        if !floater.phase_step.is_finite() {
            return Err(ConfigError::InvalidValue {
                kind: EnemyKind::Floater,
                field: "phase_step",
                value: floater.phase_step,
            });
        }
        if !(0.0..=1.0).contains(&floater.alpha) {
            return Err(ConfigError::InvalidValue {
                kind: EnemyKind::Floater,
                field: "alpha",
                value: floater.alpha,
            });
        }
        Ok(())
    }
}

fn positive(kind: EnemyKind, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { kind, field, value })
    }
}

fn non_negative_range(
    kind: EnemyKind,
    field: &'static str,
    range: ValueRange,
) -> Result<(), ConfigError> {
    check_range(kind, field, range, range.min >= 0.0)
}

fn positive_range(
    kind: EnemyKind,
    field: &'static str,
    range: ValueRange,
) -> Result<(), ConfigError> {
    check_range(kind, field, range, range.min > 0.0)
}

fn check_range(
    kind: EnemyKind,
    field: &'static str,
    range: ValueRange,
    lower_ok: bool,
) -> Result<(), ConfigError> {
    if range.is_valid() && lower_ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange {
            kind,
            field,
            min: range.min,
            max: range.max,
        })
    }
}

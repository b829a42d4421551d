//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of enemy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Crawls along the floor from the right edge.
    GroundCrawler,
    /// Descends from above on a thread, bounces back up at a random depth.
    Dropper,
    /// Drifts in from the right across the upper half with a vertical wobble.
    Floater,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [
        EnemyKind::GroundCrawler,
        EnemyKind::Dropper,
        EnemyKind::Floater,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::GroundCrawler => "ground_crawler",
            EnemyKind::Dropper => "dropper",
            EnemyKind::Floater => "floater",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

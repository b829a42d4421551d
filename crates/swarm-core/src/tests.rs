#[cfg(test)]
mod tests {
    use crate::config::WorldConfig;
    use crate::constants::*;
    use crate::enums::EnemyKind;
    use crate::error::ConfigError;
    use crate::state::{EnemyView, WorldSnapshot};
    use crate::types::{SimTime, ValueRange};

    // ---- Defaults ----

    #[test]
    fn test_default_config_is_valid() {
        let config = WorldConfig::default();
        config.validate().unwrap();
        assert_eq!(config.width, 500.0);
        assert_eq!(config.height, 800.0);
        assert_eq!(config.spawn_interval, 500.0);
        assert_eq!(config.variants, EnemyKind::ALL.to_vec());
    }

    #[test]
    fn test_variant_sizes_follow_scale() {
        let config = WorldConfig::default();

        let crawler = config.variant(EnemyKind::GroundCrawler).size();
        assert_eq!(crawler.x, CRAWLER_FRAME_WIDTH * 0.5);
        assert_eq!(crawler.y, CRAWLER_FRAME_HEIGHT * 0.5);

        let dropper = config.variant(EnemyKind::Dropper).size();
        assert_eq!(dropper.x, DROPPER_FRAME_WIDTH * 0.35);

        let floater = config.variant(EnemyKind::Floater).size();
        assert_eq!(floater.x, FLOATER_FRAME_WIDTH * 0.5);
    }

    #[test]
    fn test_max_frame_is_last_column() {
        let config = WorldConfig::default();
        for kind in EnemyKind::ALL {
            assert_eq!(config.variant(kind).max_frame(), SPRITE_COLUMNS - 1);
        }
    }

    // ---- Validation ----

    #[test]
    fn test_empty_variant_set_rejected() {
        let config = WorldConfig::with_variants(Vec::<EnemyKind>::new());
        assert!(matches!(config.validate(), Err(ConfigError::NoVariants)));
    }

    #[test]
    fn test_duplicate_variant_rejected() {
        let config = WorldConfig::with_variants([EnemyKind::Dropper, EnemyKind::Dropper]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateVariant(EnemyKind::Dropper))
        ));
    }

    #[test]
    fn test_negative_interval_rejected() {
        let config = WorldConfig {
            spawn_interval: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpawnInterval(_))
        ));

        let config = WorldConfig {
            spawn_interval: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_interval_allowed() {
        let config = WorldConfig {
            spawn_interval: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_bounds_rejected() {
        let config = WorldConfig {
            width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let mut config = WorldConfig::default();
        config.floater.speed = ValueRange::new(0.3, 0.1);
        match config.validate() {
            Err(ConfigError::InvalidRange { kind, field, .. }) => {
                assert_eq!(kind, EnemyKind::Floater);
                assert_eq!(field, "speed");
            }
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn test_stalled_drift_rejected() {
        let mut crawler_only = WorldConfig::with_variants([EnemyKind::GroundCrawler]);
        crawler_only.crawler.speed = ValueRange::new(0.0, 0.0);
        assert!(matches!(
            crawler_only.validate(),
            Err(ConfigError::InvalidRange {
                kind: EnemyKind::GroundCrawler,
                field: "speed",
                ..
            })
        ));

        let mut config = WorldConfig::default();
        config.floater.speed = ValueRange::new(0.0, 0.3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange {
                kind: EnemyKind::Floater,
                field: "speed",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_fall_speed_rejected() {
        let mut config = WorldConfig::default();
        config.dropper_motion.fall_speed = ValueRange::new(0.0, 0.2);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange {
                kind: EnemyKind::Dropper,
                field: "fall_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_dropper_may_hang_in_place() {
        let config = WorldConfig::default();
        assert_eq!(config.dropper.speed, ValueRange::new(0.0, 0.0));
        config.validate().unwrap();
    }

    #[test]
    fn test_zero_frame_count_rejected() {
        let mut config = WorldConfig::default();
        config.crawler.frame_count = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFrameCount(EnemyKind::GroundCrawler))
        ));
    }

    #[test]
    fn test_non_positive_scale_rejected() {
        let mut config = WorldConfig::default();
        config.dropper.scale = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "scale", .. })
        ));
    }

    #[test]
    fn test_floater_alpha_out_of_range_rejected() {
        let mut config = WorldConfig::default();
        config.floater_motion.alpha = 1.5;
        assert!(config.validate().is_err());
    }

    // ---- JSON ----

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = WorldConfig::from_json_str(
            r#"{ "seed": 7, "spawn_interval": 250.0, "variants": ["ground_crawler"] }"#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.spawn_interval, 250.0);
        assert_eq!(config.variants, vec![EnemyKind::GroundCrawler]);
        assert_eq!(config.width, SURFACE_WIDTH);
        assert_eq!(config.crawler, WorldConfig::default().crawler);
    }

    #[test]
    fn test_partial_variant_block_keeps_defaults() {
        let config = WorldConfig::from_json_str(
            r#"{ "crawler": { "scale": 0.3 }, "floater": { "speed": { "min": 0.2, "max": 0.4 } } }"#,
        )
        .unwrap();
        let defaults = WorldConfig::default();

        assert_eq!(config.crawler.scale, 0.3);
        assert_eq!(config.crawler.frame_width, CRAWLER_FRAME_WIDTH);
        assert_eq!(config.crawler.frame_height, CRAWLER_FRAME_HEIGHT);
        assert_eq!(config.crawler.speed, CRAWLER_SPEED);
        assert_eq!(config.crawler.sprite, defaults.crawler.sprite);

        assert_eq!(config.floater.speed, ValueRange::new(0.2, 0.4));
        assert_eq!(config.floater.scale, FLOATER_SCALE);
        assert_eq!(config.floater.frame_width, FLOATER_FRAME_WIDTH);

        assert_eq!(config.dropper, defaults.dropper);
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_variant_block_is_the_variant_default() {
        let config = WorldConfig::from_json_str(r#"{ "dropper": {} }"#).unwrap();
        assert_eq!(config.dropper, WorldConfig::default().dropper);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = WorldConfig::from_json_str("{ seed: }").unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(message.starts_with("parse config: "), "{message}");
        assert!(message.len() > "parse config: ".len());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WorldConfig::load("/nonexistent/swarm.json").unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(message.starts_with("read config: "), "{message}");
        assert!(message.len() > "read config: ".len());
    }

    // ---- Types ----

    #[test]
    fn test_value_range_lerp_and_contains() {
        let range = ValueRange::new(0.1, 0.3);
        assert!((range.lerp(0.5) - 0.2).abs() < 1e-12);
        assert!(range.contains(0.1));
        assert!(!range.contains(0.3));

        let pinned = ValueRange::new(0.0, 0.0);
        assert!(pinned.is_valid());
        assert_eq!(pinned.lerp(0.9), 0.0);
        assert!(pinned.contains(0.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(16.0);
        time.advance(17.0);
        assert_eq!(time.tick, 2);
        assert_eq!(time.elapsed_ms, 33.0);
    }

    #[test]
    fn test_snapshot_live_filter() {
        let view = |id, expired| EnemyView {
            id,
            kind: EnemyKind::Floater,
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            frame_index: 0,
            expired,
        };
        let snapshot = WorldSnapshot {
            enemies: vec![view(0, false), view(1, true), view(2, false)],
            ..Default::default()
        };
        let ids: Vec<u64> = snapshot.live().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_enemy_kind_serde_names() {
        for kind in EnemyKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }
}

use std::collections::HashSet;

use swarm_sim::core::config::WorldConfig;
use swarm_sim::core::constants::FRAME_PERIOD_MS;
use swarm_sim::core::enums::EnemyKind;
use swarm_sim::{CommandRecorder, DrawCommand, FrameDriver, World};

#[test]
fn test_single_crawler_end_to_end() {
    let config = WorldConfig {
        width: 500.0,
        height: 800.0,
        spawn_interval: 500.0,
        ..WorldConfig::with_variants([EnemyKind::GroundCrawler])
    };
    let mut world = World::new(config).unwrap();

    for delta in [0.0, 300.0, 250.0] {
        world.update(delta);
    }

    assert_eq!(world.enemies().len(), 1);
    let enemy = &world.enemies()[0];
    assert_eq!(enemy.kind(), EnemyKind::GroundCrawler);
    assert_eq!(enemy.position().x, 500.0);
    assert_eq!(enemy.position().y, 800.0 - enemy.size().y);

    let v = enemy.velocity_x();
    world.update(40.0);
    let x = world.enemies()[0].position().x;
    assert!((x - (500.0 - v * 40.0)).abs() < 1e-9);
}

#[test]
fn test_expired_enemies_gone_on_next_tick() {
    let mut world = World::new(WorldConfig::default()).unwrap();
    let mut expired_last_tick: HashSet<u64> = HashSet::new();
    let mut ever_expired = 0;

    for _ in 0..5000 {
        world.update(FRAME_PERIOD_MS);

        for enemy in world.enemies() {
            assert!(
                !expired_last_tick.contains(&enemy.id()),
                "enemy {} survived the purge after expiring",
                enemy.id()
            );
        }
        expired_last_tick = world
            .enemies()
            .iter()
            .filter(|e| e.is_expired())
            .map(|e| e.id())
            .collect();
        ever_expired += expired_last_tick.len();

        let max_frame = world.config().crawler.max_frame();
        for enemy in world.enemies() {
            assert!(enemy.frames().index() <= max_frame);
        }
    }
    assert!(ever_expired > 0, "some enemies should have left the surface");
}

#[test]
fn test_driver_frames_stay_balanced() {
    let world = World::new(WorldConfig::default()).unwrap();
    let mut driver = FrameDriver::new(world);
    let mut sink = CommandRecorder::new();

    // The host's first callback arrives with timestamp 0.
    assert_eq!(driver.frame(0.0, &mut sink), 0.0);

    let mut timestamp = 0.0;
    for _ in 0..3000 {
        timestamp += FRAME_PERIOD_MS;
        driver.frame(timestamp, &mut sink);
        assert_eq!(driver.clock().last(), timestamp);
        assert!(sink.is_balanced(), "draw state leaked out of a frame");
        assert_eq!(sink.sprite_count(), driver.world().live_count());

        let commands = sink.take();
        assert!(matches!(commands.first(), Some(DrawCommand::Clear { .. })));
    }

    let elapsed = driver.world().time().elapsed_ms;
    assert!((elapsed - (timestamp - 1.0)).abs() < 1e-6);
}

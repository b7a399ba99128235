/// SCENARIO C: a notification with more new entities than the storm
/// threshold is skipped without losing anything.

use scene_sorter_engine::{SkipReason, SorterConfig};
use scene_sorter_shared::EntityKind;
use scene_sorter_test::{new_sorter, new_sorter_with, TestHost};

fn storm_config() -> SorterConfig {
    SorterConfig {
        storm_threshold: 100,
        ..SorterConfig::default()
    }
}

#[test]
fn storm_places_nothing_and_keeps_baseline() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter_with(&host, storm_config());
    sorter.set_enabled(&mut host, true);

    for i in 0..150 {
        host.spawn(EntityKind::CameraLike, &format!("cam{}", i));
    }

    let report = sorter.on_change_notification(&mut host);
    assert_eq!(
        report.skipped,
        Some(SkipReason::Storm {
            added: 150,
            threshold: 100
        })
    );
    assert!(report.placements.is_empty());
    assert!(host.key_of("Cameras").is_none());
    assert!(sorter.state().snapshot().is_empty());

    // the same oversized diff is recomputed, not dropped
    let report = sorter.on_change_notification(&mut host);
    assert!(matches!(report.skipped, Some(SkipReason::Storm { added: 150, .. })));
    assert_eq!(host.counts().links, 0);
}

#[test]
fn storm_is_processed_once_the_diff_shrinks() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter_with(&host, storm_config());
    sorter.set_enabled(&mut host, true);

    let cameras: Vec<_> = (0..150)
        .map(|i| host.spawn(EntityKind::CameraLike, &format!("cam{}", i)))
        .collect();
    sorter.on_change_notification(&mut host);

    for camera in &cameras[..60] {
        host.despawn(camera);
    }

    let report = sorter.on_change_notification(&mut host);
    assert!(report.skipped.is_none());
    assert_eq!(report.placements.len(), 90);
    assert_eq!(host.members_of("Cameras").len(), 90);
    assert_eq!(sorter.state().snapshot().len(), 90);
}

#[test]
fn threshold_itself_is_not_a_storm() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);

    for i in 0..100 {
        host.spawn(EntityKind::LightLike, &format!("light{}", i));
    }

    let report = sorter.on_change_notification(&mut host);
    assert!(report.skipped.is_none());
    assert_eq!(report.placements.len(), 100);
}

#[test]
fn manual_classify_all_is_not_rate_governed() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter_with(&host, storm_config());
    sorter.set_enabled(&mut host, true);

    for i in 0..150 {
        host.spawn(EntityKind::CameraLike, &format!("cam{}", i));
    }
    assert!(sorter.on_change_notification(&mut host).is_skipped());

    let report = sorter.classify_all(&mut host);
    assert!(report.skipped.is_none());
    assert_eq!(report.placements.len(), 150);
}

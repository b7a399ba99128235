/// SCENARIO A: batch-created cameras are sorted, then their container is
/// reclaimed once they are all deleted.

use scene_sorter_engine::Trigger;
use scene_sorter_shared::{ColorTag, EntityKind, SceneRef};
use scene_sorter_test::{assert_sole_member, new_sorter, TestHost};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn batch_created_cameras_are_placed_then_reclaimed() {
    init_logger();
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);

    let cameras: Vec<_> = (1..=3)
        .map(|i| host.spawn(EntityKind::CameraLike, &format!("cam{}", i)))
        .collect();

    let report = sorter.on_change_notification(&mut host);
    assert_eq!(report.trigger, Trigger::Notification);
    assert!(report.skipped.is_none());
    assert_eq!(report.placements.len(), 3);
    assert_eq!(report.containers_created.len(), 1);
    assert!(report.errors.is_empty());

    for camera in &cameras {
        assert_sole_member!(host, *camera, "Cameras");
    }
    assert_eq!(host.root_child_names(), vec!["Cameras"]);
    assert!(host.root_members().is_empty());

    for camera in &cameras {
        host.despawn(camera);
    }

    let report = sorter.on_change_notification(&mut host);
    assert!(report.placements.is_empty());
    assert_eq!(report.containers_deleted.len(), 1);
    assert_eq!(report.containers_deleted[0].1, "Cameras");
    assert!(host.key_of("Cameras").is_none());
    assert!(host.root_child_names().is_empty());
}

#[test]
fn cameras_container_is_colour_tagged_on_creation() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);

    host.spawn(EntityKind::CameraLike, "Camera");
    host.spawn(EntityKind::LightLike, "Light");
    sorter.on_change_notification(&mut host);

    let cameras = host.key_of("Cameras").unwrap();
    let lighting = host.key_of("Lighting").unwrap();
    assert_eq!(host.container(&cameras).unwrap().color_tag, Some(ColorTag::Color01));
    assert_eq!(host.container(&lighting).unwrap().color_tag, None);
}

#[test]
fn container_is_created_once_across_rounds() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);

    host.spawn(EntityKind::CameraLike, "cam1");
    let first = sorter.on_change_notification(&mut host);
    host.spawn(EntityKind::CameraLike, "cam2");
    let second = sorter.on_change_notification(&mut host);

    assert_eq!(first.containers_created.len(), 1);
    assert!(second.containers_created.is_empty());
    assert_eq!(host.members_of("Cameras").len(), 2);
    assert_eq!(host.counts().created, 1);
}

#[test]
fn removal_alone_never_places() {
    let mut host = TestHost::default();
    let stray = host.spawn(EntityKind::CameraLike, "stray");
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);

    host.despawn(&stray);
    let report = sorter.on_change_notification(&mut host);

    assert!(report.placements.is_empty());
    assert!(report.containers_created.is_empty());
}

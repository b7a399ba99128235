/// SCENARIO B: toggling the sorter off and on never reclassifies what
/// already existed; only entities created afterwards are sorted.

use scene_sorter_engine::SkipReason;
use scene_sorter_shared::{AttributeValue, EntityKind, IMAGE_REFERENCE};
use scene_sorter_test::{
    assert_sole_member, fire_scheduled, membership, new_sorter, TestEntityBuilder, TestHost,
};

#[test]
fn resume_only_sorts_new_lights() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);

    let lights: Vec<_> = (1..=5)
        .map(|i| host.spawn(EntityKind::LightLike, &format!("light{}", i)))
        .collect();
    let report = sorter.on_change_notification(&mut host);
    assert_eq!(report.placements.len(), 5);
    let before = membership(&host, &lights);

    sorter.set_enabled(&mut host, false);
    assert_eq!(sorter.state().ignore_list().len(), 5);
    sorter.set_enabled(&mut host, true);

    let report = sorter.on_change_notification(&mut host);
    assert!(report.placements.is_empty());
    assert_eq!(membership(&host, &lights), before);

    let sixth = host.spawn(EntityKind::LightLike, "light6");
    let report = sorter.on_change_notification(&mut host);
    assert_eq!(report.placements.len(), 1);
    assert_eq!(report.placements[0].entity, sixth);
    assert_eq!(membership(&host, &lights), before);
    assert_sole_member!(host, sixth, "Lighting");
}

#[test]
fn entities_created_while_disabled_are_left_alone() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);
    sorter.set_enabled(&mut host, false);

    let camera = host.spawn(EntityKind::CameraLike, "made while off");
    let report = sorter.on_change_notification(&mut host);
    assert_eq!(report.skipped, Some(SkipReason::Disabled));

    sorter.set_enabled(&mut host, true);
    let report = sorter.on_change_notification(&mut host);

    assert!(report.placements.is_empty());
    assert_eq!(host.root_members(), vec![camera]);
}

#[test]
fn subscription_follows_enabled_flag() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    assert!(!host.is_subscribed());

    sorter.set_enabled(&mut host, true);
    assert!(host.is_subscribed());
    assert!(sorter.is_enabled());

    sorter.set_enabled(&mut host, false);
    assert!(!host.is_subscribed());
    assert!(!sorter.is_enabled());
}

#[test]
fn repeated_enable_keeps_the_baseline() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);

    let camera = host.spawn(EntityKind::CameraLike, "Camera");
    sorter.set_enabled(&mut host, true);
    let report = sorter.on_change_notification(&mut host);

    assert!(report.placed(&camera).is_some());
}

#[test]
fn deferred_evaluation_respects_ignore_list_after_resume() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);

    let marker = TestEntityBuilder::new(EntityKind::ImageMarker, "Empty").spawn(&mut host);
    let report = sorter.on_change_notification(&mut host);
    assert_eq!(report.deferred.len(), 1);

    sorter.set_enabled(&mut host, false);
    sorter.set_enabled(&mut host, true);
    host.set_attribute(&marker, IMAGE_REFERENCE, AttributeValue::Text("ref.png".into()));

    let reports = fire_scheduled(&mut host, &mut sorter);
    assert_eq!(reports.len(), 1);
    assert!(reports[0].placements.is_empty());
    assert_eq!(host.root_members(), vec![marker]);
}

#[test]
fn ignored_entity_that_reappears_is_sorted() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);
    let root = host.root_key();

    let light = host.spawn(EntityKind::LightLike, "Key Light");
    sorter.set_enabled(&mut host, false);
    assert!(sorter.state().ignore_list().contains(&light));

    // undo-style: the same entity disappears and comes back after resume
    let snapshot = scene_sorter_shared::SceneRef::entity(&host, &light).unwrap();
    host.despawn(&light);
    sorter.set_enabled(&mut host, true);
    host.insert_entity(&root, snapshot);

    let report = sorter.on_change_notification(&mut host);

    assert!(report.placed(&light).is_some());
    assert!(!sorter.state().ignore_list().contains(&light));
    assert_sole_member!(host, light, "Lighting");
}

#[test]
fn deleted_entities_leave_the_ignore_list() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);

    let light = host.spawn(EntityKind::LightLike, "Key");
    let kept = host.spawn(EntityKind::LightLike, "Fill");
    sorter.set_enabled(&mut host, false);
    sorter.set_enabled(&mut host, true);
    assert!(sorter.state().ignore_list().contains(&light));

    host.despawn(&light);
    let report = sorter.on_change_notification(&mut host);

    assert!(report.is_noop());
    assert!(!sorter.state().ignore_list().contains(&light));
    assert!(sorter.state().ignore_list().contains(&kept));
}

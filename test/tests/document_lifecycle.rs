/// Loading a document resets the sorter to its safe default: disabled, no
/// baseline, no ignore-list and no pending deferred work.

use scene_sorter_engine::{SkipReason, Trigger};
use scene_sorter_shared::{EntityKind, HostCapabilities};
use scene_sorter_test::{fire_scheduled, new_sorter, TestHost};

#[test]
fn document_load_disables_and_unsubscribes() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);
    host.spawn(EntityKind::CameraLike, "Main");
    sorter.on_change_notification(&mut host);

    let report = sorter.on_document_loaded(&mut host);

    assert_eq!(report.trigger, Trigger::DocumentLoaded);
    assert!(!sorter.is_enabled());
    assert!(!host.is_subscribed());
    assert!(!sorter.state().snapshot().is_primed());
    assert!(sorter.state().ignore_list().is_empty());

    host.spawn(EntityKind::CameraLike, "Second");
    let report = sorter.on_change_notification(&mut host);
    assert_eq!(report.skipped, Some(SkipReason::Disabled));
}

#[test]
fn pending_deferred_work_is_dropped() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);
    host.spawn(EntityKind::ImageMarker, "Empty");
    sorter.on_change_notification(&mut host);
    assert_eq!(sorter.pending_deferred(), 1);

    sorter.on_document_loaded(&mut host);
    sorter.set_enabled(&mut host, true);

    assert_eq!(sorter.pending_deferred(), 0);
    let reports = fire_scheduled(&mut host, &mut sorter);
    assert_eq!(reports[0].skipped, Some(SkipReason::NothingDeferred));
}

#[test]
fn capabilities_are_resolved_again() {
    let mut host = TestHost::new(HostCapabilities::minimal());
    let mut sorter = new_sorter(&host);
    assert!(!sorter.classifier().capabilities().structured_image_reference);

    host.set_capabilities(HostCapabilities::full());
    sorter.on_document_loaded(&mut host);

    assert!(sorter.classifier().capabilities().structured_image_reference);
}

#[test]
fn reenable_after_load_adopts_the_new_scene() {
    let mut host = TestHost::default();
    let mut sorter = new_sorter(&host);
    sorter.set_enabled(&mut host, true);
    sorter.on_document_loaded(&mut host);

    let existing = host.spawn(EntityKind::LightLike, "From File");
    sorter.set_enabled(&mut host, true);
    let fresh = host.spawn(EntityKind::LightLike, "New");
    let report = sorter.on_change_notification(&mut host);

    assert!(report.placed(&existing).is_none());
    assert!(report.placed(&fresh).is_some());
}

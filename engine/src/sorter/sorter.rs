use log::{debug, info, trace, warn};

use scene_sorter_shared::{
    Category, ChangeSubscription, Classification, Classifier, ContainerKey, DeferredHandle,
    EntityId, Host, HostCapabilities, SceneMut, SceneRef, Scheduler,
};

use crate::{
    change_feed::current_entity_ids,
    containers::{order, placement, ContainerRegistry, PlacementOutcome, ReclamationSweeper},
    deferred::{DeferredQueue, DeferredTask},
    governor::{Admission, RateGovernor},
    state::EngineState,
    PlacementRecord, RoundReport, SkipReason, SorterConfig, SorterError, Trigger,
};

/// Watches a host scene, classifies entities that appear in it and keeps
/// them in their managed containers.
///
/// The sorter owns all of its state; the host is passed into every entry
/// point. No entry point returns an error or panics: failures are logged and
/// collected into the returned [`RoundReport`].
pub struct Sorter {
    config: SorterConfig,
    state: EngineState,
    classifier: Classifier,
    governor: RateGovernor,
    registry: ContainerRegistry,
    sweeper: ReclamationSweeper,
    deferred: DeferredQueue,
}

impl Sorter {
    /// Creates a disabled sorter, resolving the host's capabilities once.
    pub fn new<H: SceneRef + ?Sized>(config: SorterConfig, host: &H) -> Self {
        let classifier = build_classifier(&config, host.capabilities());
        let governor = RateGovernor::new(config.storm_threshold, config.progress_log_threshold);
        let sweeper = ReclamationSweeper::new(&config.protected_container_names);

        Self {
            config,
            state: EngineState::new(),
            classifier,
            governor,
            registry: ContainerRegistry::new(),
            sweeper,
            deferred: DeferredQueue::new(),
        }
    }

    pub fn config(&self) -> &SorterConfig {
        &self.config
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    // Entry points

    /// Drives the suspend/resume machine.
    ///
    /// Disabling records every present entity in the ignore-list. Enabling
    /// makes the current scene the baseline, so nothing that already exists
    /// is reclassified by the next notification.
    pub fn set_enabled<H: Host + ?Sized>(&mut self, host: &mut H, enabled: bool) -> RoundReport {
        if enabled {
            if !self.state.is_enabled() {
                let present = current_entity_ids(&*host, "enable");
                if self.state.resume(present) {
                    host.subscribe_changes();
                }
            }
            RoundReport::new(Trigger::Enable)
        } else {
            if self.state.is_enabled() {
                let present = current_entity_ids(&*host, "disable");
                if self.state.suspend(present) {
                    host.unsubscribe_changes();
                }
            }
            RoundReport::new(Trigger::Disable)
        }
    }

    /// Body of the host's change callback.
    pub fn on_change_notification<H: SceneMut + Scheduler + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> RoundReport {
        const OPERATION: &str = "change notification";

        if !self.state.is_enabled() {
            return RoundReport::skip(Trigger::Notification, SkipReason::Disabled);
        }

        let Some(current) = current_entity_ids(&*host, OPERATION) else {
            let mut report = RoundReport::skip(Trigger::Notification, SkipReason::HostUnavailable);
            report
                .errors
                .push(SorterError::HostUnavailable { operation: OPERATION });
            return report;
        };

        if !self.state.snapshot().is_primed() {
            debug!("Sorter: adopting {} entities as baseline", current.len());
            self.state.snapshot_mut().advance(current);
            return RoundReport::skip(Trigger::Notification, SkipReason::BaselinePrimed);
        }

        let diff = self.state.snapshot().diff(&current);
        self.state.ignore_list_mut().prune(&diff.removed);

        if let Admission::Storm { added, threshold } = self.governor.admit(&diff) {
            return RoundReport::skip(Trigger::Notification, SkipReason::Storm { added, threshold });
        }

        let mut report = RoundReport::new(Trigger::Notification);
        let mut progress = self.governor.progress(diff.added.len());
        let mut retry = Vec::new();

        for (index, entity) in diff.added.iter().enumerate() {
            if self.state.ignore_list_mut().release(entity) {
                debug!("Sorter: {} changed again, no longer ignored", entity);
            }
            if self.sort_and_record(host, entity, 0, false, &mut report) {
                retry.push(*entity);
            }
            progress.tick(index + 1);
        }

        self.finish_round(host, &mut report);
        self.state.snapshot_mut().advance(current);
        self.retry_on_next_notification(&retry);

        report
    }

    /// Body of the host's timer callback for a handle this sorter scheduled.
    pub fn on_deferred<H: SceneMut + Scheduler + ?Sized>(
        &mut self,
        host: &mut H,
        handle: DeferredHandle,
    ) -> RoundReport {
        let Some(task) = self.deferred.take(&handle) else {
            trace!("Sorter: {} has no pending task", handle);
            return RoundReport::skip(Trigger::Deferred, SkipReason::NothingDeferred);
        };

        if !self.state.is_enabled() {
            debug!("Sorter: dropping deferred evaluation of {} while disabled", task.entity);
            return RoundReport::skip(Trigger::Deferred, SkipReason::Disabled);
        }

        if !task.manual && self.state.ignore_list().contains(&task.entity) {
            debug!("Sorter: {} is ignored, dropping deferred evaluation", task.entity);
            return RoundReport::skip(Trigger::Deferred, SkipReason::NothingDeferred);
        }

        if !host.has_entity(&task.entity) {
            let gone = SorterError::SchedulerEntityGone {
                entity_id: task.entity.to_string(),
            };
            trace!("Sorter: {}", gone);
            return RoundReport::skip(Trigger::Deferred, SkipReason::NothingDeferred);
        }

        let mut report = RoundReport::new(Trigger::Deferred);
        if self.sort_and_record(host, &task.entity, task.attempt, task.manual, &mut report) {
            self.retry_on_next_notification(&[task.entity]);
        }
        self.finish_round(host, &mut report);

        report
    }

    /// Classifies every entity in the scene, regardless of diff state or
    /// ignore-list, then reorders and sweeps. Linear in the entity count.
    pub fn classify_all<H: SceneMut + Scheduler + ?Sized>(&mut self, host: &mut H) -> RoundReport {
        const OPERATION: &str = "classify all";

        let Some(current) = current_entity_ids(&*host, OPERATION) else {
            let mut report = RoundReport::skip(Trigger::ClassifyAll, SkipReason::HostUnavailable);
            report
                .errors
                .push(SorterError::HostUnavailable { operation: OPERATION });
            return report;
        };

        let mut entities: Vec<EntityId> = current.into_iter().collect();
        entities.sort();

        let mut report = RoundReport::new(Trigger::ClassifyAll);
        let mut progress = self.governor.progress(entities.len());
        let mut retry = Vec::new();

        for (index, entity) in entities.iter().enumerate() {
            if self.sort_and_record(host, entity, 0, true, &mut report) {
                retry.push(*entity);
            }
            progress.tick(index + 1);
        }

        self.finish_round(host, &mut report);
        self.retry_on_next_notification(&retry);

        info!(
            "Sorter: classified {} entities, {} moved",
            entities.len(),
            report.placements.len()
        );

        report
    }

    /// Resets to the safe default for a freshly loaded document: disabled,
    /// no baseline, no ignore-list, nothing deferred.
    pub fn on_document_loaded<H: SceneRef + ChangeSubscription + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> RoundReport {
        if self.state.is_enabled() {
            host.unsubscribe_changes();
        }

        self.state.reset();
        self.registry.clear();
        self.deferred.clear();
        self.classifier = build_classifier(&self.config, host.capabilities());

        info!("Sorter: document loaded, sorting disabled");

        RoundReport::new(Trigger::DocumentLoaded)
    }

    // Pipeline

    /// Sorts one entity, recording any failure in the report. Returns true
    /// when the failure is transient and the entity should be tried again.
    fn sort_and_record<H: SceneMut + Scheduler + ?Sized>(
        &mut self,
        host: &mut H,
        entity: &EntityId,
        attempt: u8,
        manual: bool,
        report: &mut RoundReport,
    ) -> bool {
        match self.sort_entity(host, entity, attempt, manual, report) {
            Ok(()) => false,
            Err(error) => {
                warn!("Sorter: cannot sort {}: {}", entity, error);
                let transient = error.is_transient();
                report.errors.push(error);
                transient
            }
        }
    }

    /// Drops entities from the baseline so the next notification sees them
    /// as new again.
    fn retry_on_next_notification(&mut self, entities: &[EntityId]) {
        for entity in entities {
            debug!("Sorter: {} hit a transient failure, retrying on the next notification", entity);
            self.state.snapshot_mut().forget(entity);
        }
    }

    fn sort_entity<H: SceneMut + Scheduler + ?Sized>(
        &mut self,
        host: &mut H,
        entity: &EntityId,
        attempt: u8,
        manual: bool,
        report: &mut RoundReport,
    ) -> Result<(), SorterError> {
        let Some(snapshot) = host.entity(entity) else {
            trace!("Sorter: {} vanished before it could be sorted", entity);
            return Ok(());
        };

        match self.classifier.classify(&snapshot) {
            Classification::Matched(category) => {
                self.place(host, entity, category, report)?;
            }
            Classification::Pending(reason) => {
                if attempt >= self.config.max_deferred_attempts {
                    debug!(
                        "Sorter: {} still pending ({:?}) after {} attempts, leaving it in place",
                        entity, reason, attempt
                    );
                    return Ok(());
                }

                let handle = self.deferred.queue(DeferredTask {
                    entity: *entity,
                    attempt: attempt + 1,
                    manual,
                });
                host.schedule(handle, self.config.deferred_delay);

                debug!(
                    "Sorter: {} pending ({:?}), re-evaluating in {:?} as {}",
                    entity, reason, self.config.deferred_delay, handle
                );
                report.deferred.push((*entity, handle));
            }
            Classification::Unmatched => {
                trace!("Sorter: no rule matches {} ({})", entity, snapshot.kind.name());
            }
        }

        Ok(())
    }

    fn place<H: SceneMut + ?Sized>(
        &mut self,
        host: &mut H,
        entity: &EntityId,
        category: Category,
        report: &mut RoundReport,
    ) -> Result<(), SorterError> {
        let ensured = self.registry.ensure(host, category)?;

        if ensured.created {
            report.containers_created.push(ensured.key);
        }
        if let Some(conflict) = ensured.conflict {
            report.errors.push(conflict);
        }

        if let PlacementOutcome::Moved { from } = placement::place(host, entity, &ensured.key)? {
            report.placements.push(PlacementRecord {
                entity: *entity,
                category,
                from,
                to: ensured.key,
            });
        }

        Ok(())
    }

    fn finish_round<H: SceneMut + ?Sized>(&mut self, host: &mut H, report: &mut RoundReport) {
        let root = match host.root() {
            Ok(root) => root,
            Err(error) => {
                warn!("Sorter: cannot reorder or sweep: {}", error);
                report.errors.push(SorterError::HostUnavailable {
                    operation: "finish round",
                });
                return;
            }
        };

        let canonical: Vec<ContainerKey> = self
            .config
            .canonical_order
            .iter()
            .filter(|category| category.is_canonical())
            .filter_map(|category| self.registry.lookup(&*host, *category))
            .collect();

        match order::enforce(host, &root, &canonical) {
            Ok(reordered) => report.reordered = reordered,
            Err(error) => {
                warn!("Sorter: {}", error);
                report.errors.push(error);
            }
        }

        let outcome = self.sweeper.sweep(host, &root);
        for (key, _) in &outcome.deleted {
            self.registry.forget(key);
        }
        report.containers_deleted.extend(outcome.deleted);
        report.errors.extend(outcome.errors);
    }
}

fn build_classifier(config: &SorterConfig, capabilities: HostCapabilities) -> Classifier {
    let classifier = Classifier::new(capabilities);
    if config.place_generic_roots {
        classifier
    } else {
        classifier.without_generic_roots()
    }
}

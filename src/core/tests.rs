#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use chrono::Utc;
    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::future::LocalBoxFuture;
    use futures::task::LocalSpawnExt;

    use crate::core::{
        AnalyticsError, AnalyticsEvent, AnalyticsSink, ControlDisplay, ControlTone, ControlView,
        FailureLog, FormSection, LeadServices, LeadStore, LeadSubmission, LeadSubmissionController,
        NotificationKind, NotificationPresenter, Scheduler, StoreError, SubmissionState,
    };

    // ========================================================================
    // Fakes
    // ========================================================================

    #[derive(Default)]
    struct FakeStore {
        inserts: RefCell<Vec<LeadSubmission>>,
        fail_with: RefCell<Option<StoreError>>,
        gates: RefCell<Vec<oneshot::Receiver<()>>>,
    }

    impl FakeStore {
        fn failing(err: StoreError) -> Self {
            let store = Self::default();
            *store.fail_with.borrow_mut() = Some(err);
            store
        }

        /// Hold the next insert until the returned sender fires
        fn gate_next(&self) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push(rx);
            tx
        }

        fn insert_count(&self) -> usize {
            self.inserts.borrow().len()
        }
    }

    impl LeadStore for FakeStore {
        fn insert<'a>(
            &'a self,
            submission: &'a LeadSubmission,
        ) -> LocalBoxFuture<'a, Result<(), StoreError>> {
            self.inserts.borrow_mut().push(submission.clone());
            let gate = if self.gates.borrow().is_empty() {
                None
            } else {
                Some(self.gates.borrow_mut().remove(0))
            };
            let outcome = self.fail_with.borrow().clone();

            Box::pin(async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                match outcome {
                    Some(err) => Err(err),
                    None => Ok(()),
                }
            })
        }
    }

    struct FakeView {
        email: RefCell<String>,
        label: RefCell<String>,
        tone: Cell<ControlTone>,
        disabled: Cell<bool>,
        renders: RefCell<Vec<ControlDisplay>>,
        alerts: RefCell<Vec<String>>,
        clears: Cell<u32>,
        mounted: Cell<bool>,
    }

    impl FakeView {
        fn new(email: &str, label: &str) -> Self {
            Self {
                email: RefCell::new(email.to_string()),
                label: RefCell::new(label.to_string()),
                tone: Cell::new(ControlTone::Neutral),
                disabled: Cell::new(false),
                renders: RefCell::new(Vec::new()),
                alerts: RefCell::new(Vec::new()),
                clears: Cell::new(0),
                mounted: Cell::new(true),
            }
        }

        fn type_email(&self, email: &str) {
            *self.email.borrow_mut() = email.to_string();
        }
    }

    impl ControlView for FakeView {
        fn email_value(&self) -> String {
            self.email.borrow().clone()
        }

        fn control_label(&self) -> String {
            self.label.borrow().clone()
        }

        fn render_control(&self, display: &ControlDisplay) {
            *self.label.borrow_mut() = display.label.clone();
            self.tone.set(display.tone);
            self.disabled.set(display.disabled);
            self.renders.borrow_mut().push(display.clone());
        }

        fn clear_inputs(&self) {
            self.email.borrow_mut().clear();
            self.clears.set(self.clears.get() + 1);
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn is_mounted(&self) -> bool {
            self.mounted.get()
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        shown: RefCell<Vec<(NotificationKind, String, String)>>,
    }

    impl NotificationPresenter for RecordingPresenter {
        fn show(&self, kind: NotificationKind, headline: &str, detail: &str) {
            self.shown
                .borrow_mut()
                .push((kind, headline.to_string(), detail.to_string()));
        }
    }

    #[derive(Default)]
    struct RecordingAnalytics {
        events: RefCell<Vec<AnalyticsEvent>>,
        broken: bool,
    }

    impl AnalyticsSink for RecordingAnalytics {
        fn record(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
            self.events.borrow_mut().push(event.clone());
            if self.broken {
                Err(AnalyticsError::Provider("gtag threw".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct RecordingFailureLog {
        entries: RefCell<Vec<(FormSection, StoreError)>>,
    }

    impl FailureLog for RecordingFailureLog {
        fn store_failed(&self, section: FormSection, err: &StoreError) {
            self.entries.borrow_mut().push((section, err.clone()));
        }
    }

    /// Virtual clock; tasks run only when the test advances time
    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<Duration>,
        tasks: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
    }

    impl ManualScheduler {
        fn advance(&self, by: Duration) {
            let now = self.now.get() + by;
            self.now.set(now);

            let due: Vec<Box<dyn FnOnce()>> = {
                let mut tasks = self.tasks.borrow_mut();
                let (due, pending): (Vec<_>, Vec<_>) =
                    tasks.drain(..).partition(|(at, _)| *at <= now);
                *tasks = pending;
                due.into_iter().map(|(_, task)| task).collect()
            };

            for task in due {
                task();
            }
        }

        fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
            let at = self.now.get() + delay;
            self.tasks.borrow_mut().push((at, task));
        }
    }

    struct Harness {
        store: Rc<FakeStore>,
        presenter: Rc<RecordingPresenter>,
        analytics: Rc<RecordingAnalytics>,
        scheduler: Rc<ManualScheduler>,
        failures: Rc<RecordingFailureLog>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with(FakeStore::default(), RecordingAnalytics::default())
        }

        fn with(store: FakeStore, analytics: RecordingAnalytics) -> Self {
            Self {
                store: Rc::new(store),
                presenter: Rc::new(RecordingPresenter::default()),
                analytics: Rc::new(analytics),
                scheduler: Rc::new(ManualScheduler::default()),
                failures: Rc::new(RecordingFailureLog::default()),
            }
        }

        fn services(&self) -> LeadServices {
            LeadServices::new(
                self.store.clone(),
                self.presenter.clone(),
                self.analytics.clone(),
                self.scheduler.clone(),
            )
            .with_failure_log(self.failures.clone())
        }

        fn controller(&self, section: FormSection, view: &Rc<FakeView>) -> LeadSubmissionController {
            LeadSubmissionController::new(section, view.clone(), self.services())
        }
    }

    const ALMOST: Duration = Duration::from_millis(2999);
    const TICK: Duration = Duration::from_millis(1);

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn test_invalid_email_is_rejected_without_side_effects() {
        let harness = Harness::new();
        let view = Rc::new(FakeView::new("not-an-email", "Get access"));
        let controller = harness.controller(FormSection::Hero, &view);

        block_on(controller.submit());

        assert_eq!(harness.store.insert_count(), 0);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(view.alerts.borrow().len(), 1);
        assert!(view.renders.borrow().is_empty());
        assert!(harness.presenter.shown.borrow().is_empty());
        assert!(harness.analytics.events.borrow().is_empty());
        assert_eq!(harness.scheduler.pending(), 0);
        assert_eq!(view.email_value(), "not-an-email");
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let harness = Harness::new();
        let view = Rc::new(FakeView::new("", "Get access"));
        let controller = harness.controller(FormSection::Pricing, &view);

        block_on(controller.submit());

        assert_eq!(harness.store.insert_count(), 0);
        assert_eq!(view.alerts.borrow().len(), 1);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_non_matching_inputs_never_reach_the_store() {
        let harness = Harness::new();
        let view = Rc::new(FakeView::new("", "Get access"));
        let controller = harness.controller(FormSection::Hero, &view);

        for input in ["a", "a@", "@b.com", "a@b", "a@b.", "a b@c.com", "a@@b.com", "a@b@c.d"] {
            view.type_email(input);
            block_on(controller.submit());
        }

        assert_eq!(harness.store.insert_count(), 0);
        assert_eq!(view.alerts.borrow().len(), 8);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected_not_trimmed() {
        let harness = Harness::new();
        let view = Rc::new(FakeView::new(" a@b.com", "Get access"));
        let controller = harness.controller(FormSection::Hero, &view);

        block_on(controller.submit());

        assert_eq!(harness.store.insert_count(), 0);
        assert_eq!(view.alerts.borrow().len(), 1);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(view.email_value(), " a@b.com");
    }

    // ========================================================================
    // Success path
    // ========================================================================

    #[test]
    fn test_successful_submission() {
        let harness = Harness::new();
        let view = Rc::new(FakeView::new("a@b.com", "Get access"));
        let controller = harness.controller(FormSection::Hero, &view);

        let before = Utc::now();
        block_on(controller.submit());
        let after = Utc::now();

        // Exactly one insert with the typed email and a sane timestamp
        let inserts = harness.store.inserts.borrow();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].email.as_str(), "a@b.com");
        assert!(inserts[0].submitted_at >= before && inserts[0].submitted_at <= after);
        assert!(inserts[0].to_record().created_at().is_some());

        assert_eq!(controller.state(), SubmissionState::Succeeded);
        assert_eq!(
            *view.renders.borrow(),
            vec![ControlDisplay::sending(), ControlDisplay::succeeded()]
        );
        assert_eq!(view.clears.get(), 1);
        assert_eq!(view.email_value(), "");

        let shown = harness.presenter.shown.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, NotificationKind::Success);
        assert!(shown[0].2.contains("a@b.com"));
        assert!(harness.failures.entries.borrow().is_empty());
    }

    #[test]
    fn test_success_returns_to_idle_after_reset_delay() {
        let harness = Harness::new();
        let view = Rc::new(FakeView::new("a@b.com", "Get access"));
        let controller = harness.controller(FormSection::Hero, &view);

        block_on(controller.submit());
        assert!(view.disabled.get());

        harness.scheduler.advance(ALMOST);
        assert!(view.disabled.get());
        assert_eq!(controller.state(), SubmissionState::Succeeded);

        harness.scheduler.advance(TICK);
        assert!(!view.disabled.get());
        assert_eq!(view.control_label(), "Get access");
        assert_eq!(view.tone.get(), ControlTone::Neutral);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(harness.presenter.shown.borrow().len(), 1);
    }

    #[test]
    fn test_analytics_event_names_section_and_email() {
        let harness = Harness::new();
        let view = Rc::new(FakeView::new("lead@example.com", "Join"));
        let controller = harness.controller(FormSection::FinalCta, &view);

        block_on(controller.submit());

        let events = harness.analytics.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "final_cta_signup");
        assert_eq!(events[0].attributes.event_label, "lead@example.com");
        assert_eq!(events[0].attributes.event_category, "Lead Generation");
        assert_eq!(events[0].attributes.value, 1);
    }

    #[test]
    fn test_analytics_failure_does_not_affect_submission() {
        let analytics = RecordingAnalytics {
            broken: true,
            ..Default::default()
        };
        let harness = Harness::with(FakeStore::default(), analytics);
        let view = Rc::new(FakeView::new("a@b.com", "Get access"));
        let controller = harness.controller(FormSection::Hero, &view);

        block_on(controller.submit());

        assert_eq!(harness.analytics.events.borrow().len(), 1);
        assert_eq!(harness.store.insert_count(), 1);
        assert_eq!(controller.state(), SubmissionState::Succeeded);
        assert_eq!(harness.presenter.shown.borrow().len(), 1);
    }

    // ========================================================================
    // Failure path
    // ========================================================================

    #[test]
    fn test_failed_submission_keeps_input() {
        let err = StoreError::network("connection refused");
        let harness = Harness::with(FakeStore::failing(err.clone()), RecordingAnalytics::default());
        let view = Rc::new(FakeView::new("a@b.com", "Get access"));
        let controller = harness.controller(FormSection::Pricing, &view);

        block_on(controller.submit());

        assert_eq!(harness.store.insert_count(), 1);
        assert_eq!(controller.state(), SubmissionState::Failed(err));
        assert_eq!(view.email_value(), "a@b.com");
        assert_eq!(view.clears.get(), 0);
        assert_eq!(view.tone.get(), ControlTone::Error);
        assert!(view.disabled.get());

        let shown = harness.presenter.shown.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, NotificationKind::Error);
        assert!(!shown[0].2.contains("a@b.com"));

        assert_eq!(
            *harness.failures.entries.borrow(),
            vec![(FormSection::Pricing, StoreError::network("connection refused"))]
        );
    }

    #[test]
    fn test_failure_returns_to_idle_and_allows_resubmit() {
        let harness = Harness::with(
            FakeStore::failing(StoreError::rejected(500, "boom")),
            RecordingAnalytics::default(),
        );
        let view = Rc::new(FakeView::new("a@b.com", "Get access"));
        let controller = harness.controller(FormSection::Pricing, &view);

        block_on(controller.submit());
        harness.scheduler.advance(ALMOST);
        assert!(view.disabled.get());

        harness.scheduler.advance(TICK);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(view.control_label(), "Get access");
        assert_eq!(view.tone.get(), ControlTone::Neutral);
        assert!(!view.disabled.get());

        // No automatic retry; the visitor resubmits without retyping
        assert_eq!(harness.store.insert_count(), 1);
        *harness.store.fail_with.borrow_mut() = None;
        block_on(controller.submit());
        assert_eq!(harness.store.insert_count(), 2);
        assert_eq!(controller.state(), SubmissionState::Succeeded);
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    #[test]
    fn test_rapid_double_submit_makes_one_remote_call() {
        let harness = Harness::new();
        let release = harness.store.gate_next();
        let view = Rc::new(FakeView::new("a@b.com", "Get access"));
        let controller = harness.controller(FormSection::Hero, &view);

        let mut pool = LocalPool::new();
        let first = controller.clone();
        pool.spawner()
            .spawn_local(async move { first.submit().await })
            .unwrap();
        pool.run_until_stalled();

        assert_eq!(controller.state(), SubmissionState::Submitting);
        assert!(view.disabled.get());

        block_on(controller.submit());
        assert_eq!(harness.store.insert_count(), 1);

        release.send(()).unwrap();
        pool.run_until_stalled();

        assert_eq!(harness.store.insert_count(), 1);
        assert_eq!(controller.state(), SubmissionState::Succeeded);
        assert_eq!(harness.presenter.shown.borrow().len(), 1);
    }

    #[test]
    fn test_submit_during_feedback_window_is_ignored() {
        let harness = Harness::new();
        let view = Rc::new(FakeView::new("a@b.com", "Get access"));
        let controller = harness.controller(FormSection::Hero, &view);

        block_on(controller.submit());
        view.type_email("a@b.com");
        block_on(controller.submit());
        assert_eq!(harness.store.insert_count(), 1);

        // Duplicate leads are allowed once the form is idle again
        harness.scheduler.advance(Duration::from_secs(3));
        block_on(controller.submit());
        assert_eq!(harness.store.insert_count(), 2);
    }

    #[test]
    fn test_distinct_forms_submit_concurrently() {
        let harness = Harness::new();
        let release_hero = harness.store.gate_next();
        let release_pricing = harness.store.gate_next();

        let hero_view = Rc::new(FakeView::new("one@example.com", "Get access"));
        let pricing_view = Rc::new(FakeView::new("two@example.com", "Subscribe"));
        let hero = harness.controller(FormSection::Hero, &hero_view);
        let pricing = harness.controller(FormSection::Pricing, &pricing_view);

        let mut pool = LocalPool::new();
        let (a, b) = (hero.clone(), pricing.clone());
        pool.spawner().spawn_local(async move { a.submit().await }).unwrap();
        pool.spawner().spawn_local(async move { b.submit().await }).unwrap();
        pool.run_until_stalled();

        assert_eq!(harness.store.insert_count(), 2);
        assert_eq!(hero.state(), SubmissionState::Submitting);
        assert_eq!(pricing.state(), SubmissionState::Submitting);

        release_pricing.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(hero.state(), SubmissionState::Submitting);
        assert_eq!(pricing.state(), SubmissionState::Succeeded);

        release_hero.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(hero.state(), SubmissionState::Succeeded);

        let names: Vec<String> = harness
            .analytics
            .events
            .borrow()
            .iter()
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(names, vec!["hero_signup", "pricing_signup"]);
    }

    // ========================================================================
    // Unmounted forms
    // ========================================================================

    #[test]
    fn test_reset_after_unmount_is_noop() {
        let harness = Harness::new();
        let view = Rc::new(FakeView::new("a@b.com", "Get access"));
        let controller = harness.controller(FormSection::ExitIntent, &view);

        block_on(controller.submit());
        let renders_before = view.renders.borrow().len();

        view.mounted.set(false);
        harness.scheduler.advance(Duration::from_secs(3));

        assert_eq!(view.renders.borrow().len(), renders_before);
        assert_eq!(harness.scheduler.pending(), 0);
    }

    #[test]
    fn test_unmount_during_insert_still_notifies() {
        let harness = Harness::new();
        let release = harness.store.gate_next();
        let view = Rc::new(FakeView::new("a@b.com", "Get access"));
        let controller = harness.controller(FormSection::ExitIntent, &view);

        let mut pool = LocalPool::new();
        let c = controller.clone();
        pool.spawner().spawn_local(async move { c.submit().await }).unwrap();
        pool.run_until_stalled();

        view.mounted.set(false);
        release.send(()).unwrap();
        pool.run_until_stalled();

        // Only the "sending" render happened while mounted
        assert_eq!(*view.renders.borrow(), vec![ControlDisplay::sending()]);
        assert_eq!(view.clears.get(), 0);
        assert_eq!(harness.presenter.shown.borrow().len(), 1);
    }

    #[test]
    fn test_custom_reset_delay() {
        let harness = Harness::new();
        let view = Rc::new(FakeView::new("a@b.com", "Get access"));
        let services = harness.services().with_reset_delay(Duration::from_millis(500));
        let controller = LeadSubmissionController::new(FormSection::Hero, view.clone(), services);

        block_on(controller.submit());
        harness.scheduler.advance(Duration::from_millis(500));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }
}

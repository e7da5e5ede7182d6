use std::time::Duration;

use gloo_timers::callback::Timeout;

use super::form::{BookingAction, BookingForm};
use super::sink::SubmissionSink;

/// How long the "Request Sent!" confirmation stays up.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// One-shot timers. Dropping a handle must cancel its task if it has not run.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo. `Timeout` clears itself on drop.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

/// Owns the pending confirmation reset of a booking form.
///
/// Only one reset is ever pending: submitting again replaces the handle,
/// which cancels the earlier timer and restarts the window. The owner calls
/// [`SubmissionCycle::cancel`] on teardown so no state is touched after the
/// form is gone; dropping the cycle has the same effect.
pub struct SubmissionCycle<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> SubmissionCycle<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn submit<D>(&mut self, form: &BookingForm, sink: &dyn SubmissionSink, dispatch: D)
    where
        D: Fn(BookingAction) + 'static,
    {
        sink.record(form);
        dispatch(BookingAction::Submit);
        let reset = self.scheduler.schedule(
            RESET_DELAY,
            Box::new(move || dispatch(BookingAction::Expire)),
        );
        self.pending = Some(reset);
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("Cancelled pending booking reset");
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::*;

    struct Task {
        id: u64,
        due: Duration,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: Duration,
        next_id: u64,
        tasks: Vec<Task>,
    }

    /// Virtual clock for driving timers from tests.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub(crate) struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().tasks.retain(|task| task.id != self.id);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.tasks.push(Task { id, due, run: task });
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    impl ManualScheduler {
        /// Moves the clock forward, running every task that falls due in order.
        pub(crate) fn advance(&self, by: Duration) {
            let target = self.queue.borrow().now + by;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let earliest = queue
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.id))
                        .map(|(index, _)| index);
                    earliest.map(|index| {
                        let task = queue.tasks.remove(index);
                        queue.now = task.due;
                        task.run
                    })
                };
                match next {
                    Some(run) => run(),
                    None => break,
                }
            }
            self.queue.borrow_mut().now = target;
        }

        pub(crate) fn pending(&self) -> usize {
            self.queue.borrow().tasks.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use yew::Reducible;

    use super::manual::ManualScheduler;
    use super::*;
    use crate::booking::form::{BookingState, Field, ServiceKind};
    use crate::booking::sink::recording::RecordingSink;

    /// Stands in for a `use_reducer` handle.
    #[derive(Clone, Default)]
    struct Store(Rc<RefCell<Rc<BookingState>>>);

    impl Store {
        fn dispatch(&self, action: BookingAction) {
            let current = Rc::clone(&self.0.borrow());
            *self.0.borrow_mut() = current.reduce(action);
        }

        fn dispatcher(&self) -> impl Fn(BookingAction) + 'static {
            let store = self.clone();
            move |action| store.dispatch(action)
        }

        fn state(&self) -> Rc<BookingState> {
            Rc::clone(&self.0.borrow())
        }
    }

    fn filled_store() -> Store {
        let store = Store::default();
        store.dispatch(BookingAction::Update(Field::Name, "A".into()));
        store.dispatch(BookingAction::Update(Field::Email, "a@b.com".into()));
        store.dispatch(BookingAction::Update(Field::Phone, "0800000000".into()));
        store.dispatch(BookingAction::Update(Field::Date, "2025-01-01".into()));
        store
    }

    #[test]
    fn booking_end_to_end() {
        let clock = ManualScheduler::default();
        let mut cycle = SubmissionCycle::new(clock.clone());
        let sink = RecordingSink::default();
        let store = filled_store();

        cycle.submit(&store.state().form, &sink, store.dispatcher());
        assert!(store.state().submitted);

        let snapshots = sink.snapshots.borrow();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(
            serde_json::to_value(&snapshots[0]).unwrap(),
            serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "phone": "0800000000",
                "date": "2025-01-01",
                "service": "General Maintenance",
            })
        );
        drop(snapshots);

        clock.advance(RESET_DELAY);
        assert!(!store.state().submitted);
        assert_eq!(store.state().form.name, "A");
        assert_eq!(store.state().form.service, ServiceKind::GeneralMaintenance);
    }

    #[test]
    fn flag_stays_up_until_exactly_three_seconds() {
        let clock = ManualScheduler::default();
        let mut cycle = SubmissionCycle::new(clock.clone());
        let store = filled_store();

        cycle.submit(&store.state().form, &RecordingSink::default(), store.dispatcher());
        clock.advance(Duration::from_millis(2999));
        assert!(store.state().submitted);
        clock.advance(Duration::from_millis(1));
        assert!(!store.state().submitted);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn resubmitting_restarts_the_window_and_re_emits() {
        let clock = ManualScheduler::default();
        let mut cycle = SubmissionCycle::new(clock.clone());
        let sink = RecordingSink::default();
        let store = filled_store();

        cycle.submit(&store.state().form, &sink, store.dispatcher());
        clock.advance(Duration::from_millis(2000));
        store.dispatch(BookingAction::Update(Field::Name, "B".into()));
        cycle.submit(&store.state().form, &sink, store.dispatcher());
        assert_eq!(clock.pending(), 1);

        clock.advance(Duration::from_millis(2000));
        assert!(store.state().submitted, "first timer must have been replaced");
        clock.advance(Duration::from_millis(1000));
        assert!(!store.state().submitted);

        let names: Vec<_> = sink.snapshots.borrow().iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn cancel_prevents_the_reset() {
        let clock = ManualScheduler::default();
        let mut cycle = SubmissionCycle::new(clock.clone());
        let store = filled_store();

        cycle.submit(&store.state().form, &RecordingSink::default(), store.dispatcher());
        cycle.cancel();
        assert_eq!(clock.pending(), 0);
        cycle.cancel();

        clock.advance(Duration::from_secs(10));
        assert!(store.state().submitted);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn dropping_the_cycle_cancels_the_reset() {
        let clock = ManualScheduler::default();
        let store = filled_store();
        {
            let mut cycle = SubmissionCycle::new(clock.clone());
            cycle.submit(&store.state().form, &RecordingSink::default(), store.dispatcher());
        }
        assert_eq!(clock.pending(), 0);
        clock.advance(RESET_DELAY);
        assert!(store.state().submitted);
    }
}

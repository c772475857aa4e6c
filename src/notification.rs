//! Notification Timer
//!
//! Transient status message with auto-expiry. At most one expiry is pending;
//! showing a new message cancels the previous one.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Cancellation handle for a scheduled task
pub struct TimerHandle {
    cancel: Box<dyn FnOnce()>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Box::new(cancel),
        }
    }

    pub fn cancel(self) {
        (self.cancel)()
    }
}

/// Runs a task once after a delay
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle;
}

/// `setTimeout`-backed scheduler
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, task);
        TimerHandle::new(move || drop(timeout.cancel()))
    }
}

#[derive(Default)]
struct PendingExpiry {
    /// Bumped on every show/clear; an expiry only fires for its own generation
    generation: u64,
    handle: Option<TimerHandle>,
}

/// Publishes `Some(message)` on show and `None` on expiry or clear
pub struct NotificationTimer {
    scheduler: Rc<dyn Scheduler>,
    sink: Rc<dyn Fn(Option<String>)>,
    pending: Rc<RefCell<PendingExpiry>>,
}

impl NotificationTimer {
    pub fn new(scheduler: Rc<dyn Scheduler>, sink: impl Fn(Option<String>) + 'static) -> Self {
        Self {
            scheduler,
            sink: Rc::new(sink),
            pending: Rc::new(RefCell::new(PendingExpiry::default())),
        }
    }

    /// Show `message` for `duration`, superseding any active message
    pub fn show(&self, message: impl Into<String>, duration: Duration) {
        let generation = self.supersede();
        (self.sink)(Some(message.into()));

        let pending = Rc::clone(&self.pending);
        let sink = Rc::clone(&self.sink);
        let handle = self.scheduler.schedule(
            duration,
            Box::new(move || {
                let current = {
                    let mut pending = pending.borrow_mut();
                    if pending.generation == generation {
                        pending.handle = None;
                        true
                    } else {
                        false
                    }
                };
                if current {
                    log::debug!("notification expired");
                    sink(None);
                }
            }),
        );
        self.pending.borrow_mut().handle = Some(handle);
    }

    /// Drop the active message now
    pub fn clear(&self) {
        self.supersede();
        (self.sink)(None);
    }

    // Cancels the outstanding expiry and returns the new generation.
    fn supersede(&self) -> u64 {
        let (generation, previous) = {
            let mut pending = self.pending.borrow_mut();
            pending.generation += 1;
            (pending.generation, pending.handle.take())
        };
        if let Some(handle) = previous {
            handle.cancel();
        }
        generation
    }
}

impl Drop for NotificationTimer {
    fn drop(&mut self) {
        let previous = self.pending.borrow_mut().handle.take();
        if let Some(handle) = previous {
            handle.cancel();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    struct ScheduledTask {
        id: u64,
        deadline: Duration,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        tasks: Vec<ScheduledTask>,
    }

    /// Virtual-time scheduler; tasks run only from `advance`
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub(crate) fn advance(&self, by: Duration) {
            let target = self.clock.borrow().now + by;
            loop {
                let due = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.deadline <= target)
                        .min_by_key(|(_, t)| (t.deadline, t.id))
                        .map(|(i, _)| i);
                    match next {
                        Some(index) => {
                            let scheduled = clock.tasks.remove(index);
                            clock.now = scheduled.deadline;
                            Some(scheduled.task)
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };
                match due {
                    Some(task) => task(),
                    None => break,
                }
            }
        }

        pub(crate) fn scheduled(&self) -> usize {
            self.clock.borrow().tasks.len()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
            let id = {
                let mut clock = self.clock.borrow_mut();
                let id = clock.next_id;
                clock.next_id += 1;
                let deadline = clock.now + delay;
                clock.tasks.push(ScheduledTask { id, deadline, task });
                id
            };
            let clock = Rc::clone(&self.clock);
            TimerHandle::new(move || clock.borrow_mut().tasks.retain(|t| t.id != id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;

    const FIVE_SECONDS: Duration = Duration::from_millis(5000);

    fn timer() -> (NotificationTimer, ManualScheduler, Rc<RefCell<Option<String>>>) {
        let scheduler = ManualScheduler::default();
        let shown = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&shown);
        let timer = NotificationTimer::new(Rc::new(scheduler.clone()), move |msg| {
            *sink.borrow_mut() = msg;
        });
        (timer, scheduler, shown)
    }

    #[test]
    fn test_show_then_expire() {
        let (timer, scheduler, shown) = timer();
        timer.show("hello", FIVE_SECONDS);
        assert_eq!(shown.borrow().as_deref(), Some("hello"));
        assert_eq!(scheduler.scheduled(), 1);

        scheduler.advance(Duration::from_millis(4999));
        assert_eq!(shown.borrow().as_deref(), Some("hello"));

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*shown.borrow(), None);
        assert_eq!(scheduler.scheduled(), 0);
    }

    #[test]
    fn test_second_show_supersedes_first() {
        let (timer, scheduler, shown) = timer();
        timer.show("A", FIVE_SECONDS);
        scheduler.advance(Duration::from_millis(1000));
        timer.show("B", FIVE_SECONDS);
        assert_eq!(scheduler.scheduled(), 1);

        // First timer's deadline passes without clearing B
        scheduler.advance(Duration::from_millis(4999));
        assert_eq!(shown.borrow().as_deref(), Some("B"));

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*shown.borrow(), None);
    }

    #[test]
    fn test_back_to_back_shows() {
        let (timer, scheduler, shown) = timer();
        timer.show("A", FIVE_SECONDS);
        timer.show("B", FIVE_SECONDS);

        scheduler.advance(Duration::from_millis(4999));
        assert_eq!(shown.borrow().as_deref(), Some("B"));
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*shown.borrow(), None);
    }

    #[test]
    fn test_clear_cancels_pending() {
        let (timer, scheduler, shown) = timer();
        timer.show("A", FIVE_SECONDS);
        timer.clear();
        assert_eq!(*shown.borrow(), None);
        assert_eq!(scheduler.scheduled(), 0);

        timer.show("B", FIVE_SECONDS);
        scheduler.advance(Duration::from_millis(2500));
        assert_eq!(shown.borrow().as_deref(), Some("B"));
    }

    #[test]
    fn test_drop_cancels_pending() {
        let (timer, scheduler, _shown) = timer();
        timer.show("A", FIVE_SECONDS);
        drop(timer);
        assert_eq!(scheduler.scheduled(), 0);
    }
}

//! A single-threaded cooperative event loop.
//!
//! The loop owns one piece of state `S` and runs tasks against it, one at a
//! time, on the thread that drives it (the UI thread). Tasks arrive two ways:
//!
//! - [`Scheduler::schedule_after`] queues a timer from inside a running task.
//!   This is how repeating work (like a loading animation) re-arms itself.
//! - [`UiHandle::post`] sends a task from any other thread. This is the only
//!   way a worker thread may touch `S`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

/// A unit of work run on the loop thread with exclusive access to the state.
pub type Task<S> = Box<dyn FnOnce(&mut S, &mut Scheduler<S>) + Send + 'static>;

/// Returned by [`UiHandle::post`] after the loop has been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("event loop has shut down")]
pub struct LoopClosed;

/// Thread-safe handle for marshaling work onto the loop thread.
pub struct UiHandle<S> {
    sender: Sender<Task<S>>,
}

impl<S> Clone for UiHandle<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: 'static> UiHandle<S> {
    pub fn post<F>(&self, task: F) -> Result<(), LoopClosed>
    where
        F: FnOnce(&mut S, &mut Scheduler<S>) + Send + 'static,
    {
        self.sender.send(Box::new(task)).map_err(|_| LoopClosed)
    }
}

struct Timer<S> {
    due: Instant,
    seq: u64,
    task: Task<S>,
}

impl<S> PartialEq for Timer<S> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<S> Eq for Timer<S> {}

impl<S> PartialOrd for Timer<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Timer<S> {
    // Reversed so the max-heap pops the earliest deadline, then the oldest timer
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Timer queue and control surface handed to every task.
pub struct Scheduler<S> {
    timers: BinaryHeap<Timer<S>>,
    next_seq: u64,
    handle: UiHandle<S>,
    quit: bool,
}

impl<S: 'static> Scheduler<S> {
    /// Runs `task` on the loop thread once `delay` has elapsed.
    pub fn schedule_after<F>(&mut self, delay: Duration, task: F)
    where
        F: FnOnce(&mut S, &mut Self) + Send + 'static,
    {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            due: Instant::now() + delay,
            seq,
            task: Box::new(task),
        });
    }

    pub fn handle(&self) -> UiHandle<S> {
        self.handle.clone()
    }

    /// Asks the loop to stop after the current task.
    pub const fn quit(&mut self) {
        self.quit = true;
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn next_due(&self) -> Option<Instant> {
        self.timers.peek().map(|timer| timer.due)
    }

    fn pop_due(&mut self, now: Instant, horizon: u64) -> Option<Task<S>> {
        let next = self.timers.peek()?;
        if next.due <= now && next.seq < horizon {
            self.timers.pop().map(|timer| timer.task)
        } else {
            None
        }
    }
}

/// The loop itself: state, timers and the inbound task channel.
pub struct EventLoop<S> {
    state: S,
    scheduler: Scheduler<S>,
    receiver: Receiver<Task<S>>,
}

impl<S: 'static> EventLoop<S> {
    pub fn new(state: S) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            state,
            scheduler: Scheduler {
                timers: BinaryHeap::new(),
                next_seq: 0,
                handle: UiHandle { sender },
                quit: false,
            },
            receiver,
        }
    }

    pub fn handle(&self) -> UiHandle<S> {
        self.scheduler.handle()
    }

    pub const fn state(&self) -> &S {
        &self.state
    }

    pub const fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    pub const fn is_stopped(&self) -> bool {
        self.scheduler.quit
    }

    /// Runs `task` right now on the calling thread.
    pub fn dispatch<R>(&mut self, task: impl FnOnce(&mut S, &mut Scheduler<S>) -> R) -> R {
        task(&mut self.state, &mut self.scheduler)
    }

    /// Runs every timer due by now (earliest first), then every posted task.
    ///
    /// Timers armed while this runs wait for the next call, so a task that
    /// reschedules itself with a zero delay cannot starve the loop.
    pub fn run_ready(&mut self) -> usize {
        let now = Instant::now();
        let horizon = self.scheduler.next_seq;
        let mut ran = 0;

        while let Some(task) = self.scheduler.pop_due(now, horizon) {
            task(&mut self.state, &mut self.scheduler);
            ran += 1;
        }
        while let Ok(task) = self.receiver.try_recv() {
            task(&mut self.state, &mut self.scheduler);
            ran += 1;
        }

        ran
    }

    /// Waits for the next timer or posted task (at most `max_wait`) and runs
    /// whatever is ready. Returns `false` once [`Scheduler::quit`] was called.
    pub fn turn(&mut self, max_wait: Duration) -> bool {
        if self.scheduler.quit {
            return false;
        }

        let wait = self.scheduler.next_due().map_or(max_wait, |due| {
            due.saturating_duration_since(Instant::now()).min(max_wait)
        });

        // The scheduler holds a sender, so the channel never disconnects
        match self.receiver.recv_timeout(wait) {
            Ok(task) => task(&mut self.state, &mut self.scheduler),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => {}
        }
        self.run_ready();

        !self.scheduler.quit
    }

    /// Runs until a task calls [`Scheduler::quit`].
    pub fn run(&mut self) {
        while self.turn(Duration::from_secs(60)) {}
    }

    /// Runs until `done` holds for the state, the loop quits, or `timeout`
    /// passes. Returns the final value of `done`.
    pub fn run_until(&mut self, timeout: Duration, mut done: impl FnMut(&S) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if done(&self.state) {
                return true;
            }
            let now = Instant::now();
            if now >= deadline || self.scheduler.quit {
                return false;
            }
            self.turn(deadline - now);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let mut event_loop = EventLoop::new(Vec::<&str>::new());
        event_loop.dispatch(|_, s| {
            s.schedule_after(Duration::from_millis(30), |log, _| log.push("late"));
            s.schedule_after(Duration::from_millis(5), |log, _| log.push("early"));
        });

        assert!(event_loop.run_until(Duration::from_secs(2), |log| log.len() == 2));
        assert_eq!(event_loop.state(), &vec!["early", "late"]);
    }

    #[test]
    fn test_equal_delays_fire_in_scheduling_order() {
        let mut event_loop = EventLoop::new(Vec::<u32>::new());
        event_loop.dispatch(|_, s| {
            for i in 0..5 {
                s.schedule_after(Duration::ZERO, move |log, _| log.push(i));
            }
        });

        assert!(event_loop.run_until(Duration::from_secs(2), |log| log.len() == 5));
        assert_eq!(event_loop.state(), &vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_posted_task_runs_on_loop_thread() {
        let mut event_loop = EventLoop::new(None::<thread::ThreadId>);
        let handle = event_loop.handle();
        let loop_thread = thread::current().id();

        thread::spawn(move || {
            handle
                .post(|seen, _| *seen = Some(thread::current().id()))
                .unwrap();
        });

        assert!(event_loop.run_until(Duration::from_secs(2), Option::is_some));
        assert_eq!(event_loop.state(), &Some(loop_thread));
    }

    fn countdown(remaining: &mut u32, scheduler: &mut Scheduler<u32>) {
        *remaining -= 1;
        if *remaining > 0 {
            scheduler.schedule_after(Duration::from_millis(1), countdown);
        }
    }

    #[test]
    fn test_self_rescheduling_chain_stops_on_its_own() {
        let mut event_loop = EventLoop::new(5_u32);
        event_loop.dispatch(countdown);

        assert!(event_loop.run_until(Duration::from_secs(2), |n| *n == 0));
        event_loop.dispatch(|_, s| assert_eq!(s.pending_timers(), 0));
    }

    #[test]
    fn test_zero_delay_reschedule_does_not_starve_run_ready() {
        fn spin(count: &mut u32, scheduler: &mut Scheduler<u32>) {
            *count += 1;
            scheduler.schedule_after(Duration::ZERO, spin);
        }

        let mut event_loop = EventLoop::new(0_u32);
        event_loop.dispatch(|_, s| s.schedule_after(Duration::ZERO, spin));
        thread::sleep(Duration::from_millis(1));

        assert_eq!(event_loop.run_ready(), 1);
        assert_eq!(*event_loop.state(), 1);
    }

    #[test]
    fn test_quit_stops_run() {
        let mut event_loop = EventLoop::new(0_u32);
        let handle = event_loop.handle();

        thread::spawn(move || {
            handle
                .post(|n, s| {
                    *n += 1;
                    s.quit();
                })
                .unwrap();
        });

        event_loop.run();
        assert!(event_loop.is_stopped());
        assert_eq!(event_loop.into_state(), 1);
    }

    #[test]
    fn test_post_after_drop_reports_closed() {
        let event_loop = EventLoop::new(());
        let handle = event_loop.handle();
        drop(event_loop);

        assert_eq!(handle.post(|_, _| {}), Err(LoopClosed));
    }

    #[test]
    fn test_run_until_times_out() {
        let mut event_loop = EventLoop::new(false);
        assert!(!event_loop.run_until(Duration::from_millis(20), |done| *done));
    }
}

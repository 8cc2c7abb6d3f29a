// Copyright 2026 the Landing Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual-time task host.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use landing_core::interaction::LoadTiming;
use landing_core::surface::{PageClock, TaskHost};
use landing_core::time::{Duration, WallTime};

/// Shortest period a repeating task may have.
const MIN_PERIOD: Duration = Duration(1);

struct Repeating {
    period: Duration,
    next_due: WallTime,
    /// `None` while the task is running.
    task: Option<Box<dyn FnMut()>>,
}

struct HostState {
    now: WallTime,
    load_timing: Option<LoadTiming>,
    repeating: Vec<Repeating>,
    deferred: VecDeque<Box<dyn FnOnce()>>,
    runs: u64,
}

/// A [`TaskHost`] and [`PageClock`] whose clock only moves on request.
///
/// Clones share the same clock and task queues. Tasks run with no borrow of
/// the host held, so they may schedule further work.
#[derive(Clone)]
pub struct ManualHost {
    state: Rc<RefCell<HostState>>,
}

impl fmt::Debug for ManualHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualHost")
            .field("now", &state.now)
            .field("repeating", &state.repeating.len())
            .field("deferred", &state.deferred.len())
            .field("runs", &state.runs)
            .finish_non_exhaustive()
    }
}

impl ManualHost {
    /// Creates a host whose clock reads `now`.
    #[must_use]
    pub fn new(now: WallTime) -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                now,
                load_timing: None,
                repeating: Vec::new(),
                deferred: VecDeque::new(),
                runs: 0,
            })),
        }
    }

    /// Sets the navigation timing [`PageClock::load_timing`] reports.
    pub fn set_load_timing(&self, timing: Option<LoadTiming>) {
        self.state.borrow_mut().load_timing = timing;
    }

    /// Returns the number of repeating tasks registered.
    #[must_use]
    pub fn repeating_tasks(&self) -> usize {
        self.state.borrow().repeating.len()
    }

    /// Returns the number of deferred tasks waiting to run.
    #[must_use]
    pub fn pending_deferred(&self) -> usize {
        self.state.borrow().deferred.len()
    }

    /// Returns the total number of task runs so far.
    #[must_use]
    pub fn runs(&self) -> u64 {
        self.state.borrow().runs
    }

    /// Runs deferred tasks until the queue is empty, including tasks deferred
    /// by the tasks being run. Returns the number run.
    pub fn run_deferred(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let next = state.deferred.pop_front();
                if next.is_some() {
                    state.runs += 1;
                }
                next
            };
            let Some(task) = next else {
                return ran;
            };
            task();
            ran += 1;
        }
    }

    /// Moves the clock forward by `by`.
    ///
    /// Deferred tasks run first at the current time. Then every repeating task
    /// falling due within the window runs in due order, with the clock set to
    /// its due time. Returns the number of repeating runs.
    pub fn advance(&self, by: Duration) -> usize {
        self.run_deferred();
        let until = self.state.borrow().now + by;
        let mut ran = 0;
        while let Some(index) = self.next_due(until) {
            let mut task = {
                let mut state = self.state.borrow_mut();
                let due = state.repeating[index].next_due;
                state.now = due;
                state.runs += 1;
                let Some(task) = state.repeating[index].task.take() else {
                    break;
                };
                task
            };
            task();
            ran += 1;
            let mut state = self.state.borrow_mut();
            let entry = &mut state.repeating[index];
            entry.task = Some(task);
            entry.next_due = entry.next_due + entry.period;
        }
        let mut state = self.state.borrow_mut();
        if state.now < until {
            state.now = until;
        }
        ran
    }

    /// Returns the index of the earliest repeating task due at or before
    /// `until`. Ties go to the task registered first.
    fn next_due(&self, until: WallTime) -> Option<usize> {
        let state = self.state.borrow();
        state
            .repeating
            .iter()
            .enumerate()
            .filter(|(_, r)| r.task.is_some() && r.next_due <= until)
            .min_by_key(|(i, r)| (r.next_due, *i))
            .map(|(i, _)| i)
    }
}

impl TaskHost for ManualHost {
    fn repeat(&self, period: Duration, task: Box<dyn FnMut()>) {
        let mut state = self.state.borrow_mut();
        let period = period.max(MIN_PERIOD);
        let next_due = state.now + period;
        state.repeating.push(Repeating {
            period,
            next_due,
            task: Some(task),
        });
    }

    fn defer(&self, task: Box<dyn FnOnce()>) {
        self.state.borrow_mut().deferred.push_back(task);
    }
}

impl PageClock for ManualHost {
    fn now(&self) -> WallTime {
        self.state.borrow().now
    }

    fn load_timing(&self) -> Option<LoadTiming> {
        self.state.borrow().load_timing
    }
}

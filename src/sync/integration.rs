//! Automatic synchronization driven by store notifications.
//!
//! The store subscription only records work: every external change enqueues a
//! P/L -> B/S task for the current period. [`AutoSync::drain`] runs the queue
//! after the triggering mutation has returned; each P/L -> B/S task schedules
//! the B/S -> C/F step for the same period at the back of the queue, so it runs
//! only once the first write and its notifications have settled. Writes made
//! while draining are not re-enqueued.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use crate::store::{StateStore, Subscription};

use super::engine::{sync_bs_to_cf, sync_pl_to_bs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTask {
    PlToBs(usize),
    BsToCf(usize),
}

#[derive(Debug, Default)]
struct SyncQueue {
    tasks: VecDeque<SyncTask>,
    draining: bool,
}

impl SyncQueue {
    fn push(&mut self, task: SyncTask) {
        if !self.tasks.contains(&task) {
            self.tasks.push_back(task);
        }
    }
}

/// Handle owning the auto-sync subscription and its task queue.
#[derive(Debug)]
pub struct AutoSync {
    subscription: Subscription,
    queue: Rc<RefCell<SyncQueue>>,
}

impl AutoSync {
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    pub fn pending_tasks(&self) -> Vec<SyncTask> {
        self.queue.borrow().tasks.iter().copied().collect()
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }

    /// Runs queued tasks until the queue is empty. Returns how many ran.
    pub fn drain(&self, store: &mut StateStore) -> usize {
        self.queue.borrow_mut().draining = true;
        let mut executed = 0;
        loop {
            let next = self.queue.borrow_mut().tasks.pop_front();
            let Some(task) = next else {
                break;
            };
            match task {
                SyncTask::PlToBs(index) => {
                    sync_pl_to_bs(store, index);
                    self.queue.borrow_mut().push(SyncTask::BsToCf(index));
                }
                SyncTask::BsToCf(index) => {
                    sync_bs_to_cf(store, index);
                }
            }
            executed += 1;
        }
        self.queue.borrow_mut().draining = false;
        if executed > 0 {
            tracing::debug!(executed, "auto-sync queue drained");
        }
        executed
    }
}

/// Subscribes auto-sync to `store`, first tearing down `previous` if given so
/// only one propagation chain is ever active per handle owner.
pub fn initialize_integration(store: &StateStore, previous: Option<AutoSync>) -> AutoSync {
    if let Some(previous) = previous {
        cleanup_integration(previous);
    }

    let queue = Rc::new(RefCell::new(SyncQueue::default()));
    let recorder = Rc::clone(&queue);
    let subscription = store.subscribe(move |state| {
        let Ok(mut queue) = recorder.try_borrow_mut() else {
            return;
        };
        if queue.draining || state.periods.is_empty() {
            return;
        }
        queue.push(SyncTask::PlToBs(state.current_period_index));
    });
    tracing::info!(subscription = subscription.id(), "auto-sync enabled");

    AutoSync {
        subscription,
        queue,
    }
}

/// Removes the subscription and discards any queued tasks.
pub fn cleanup_integration(handle: AutoSync) {
    let discarded = handle.pending();
    handle.subscription.unsubscribe();
    tracing::info!(
        subscription = handle.subscription.id(),
        discarded,
        "auto-sync disabled"
    );
}

//! Deferred update scheduling at the host's batching boundary.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// Deferred unit of work queued by an element.
pub type UpdateTask = Box<dyn FnOnce()>;

/// Host batching boundary that runs deferred element update passes.
///
/// Implementations must run every scheduled task exactly once, in submission order, and never
/// synchronously inside [`UpdateScheduler::schedule`].
pub trait UpdateScheduler {
    /// Queues `task` for the next batching checkpoint.
    fn schedule(&self, task: UpdateTask);
}

/// Scheduler drained explicitly by the host (or a test) at its own checkpoints.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<UpdateTask>>>,
}

impl ManualScheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting for the next checkpoint.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Runs queued tasks until the queue is empty and returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            // Take the current batch before running it so tasks scheduled by a running task
            // land in a fresh batch instead of aliasing the in-flight drain.
            let batch = std::mem::take(&mut *self.queue.borrow_mut());
            if batch.is_empty() {
                return ran;
            }
            for task in batch {
                task();
                ran += 1;
            }
        }
    }
}

impl UpdateScheduler for ManualScheduler {
    fn schedule(&self, task: UpdateTask) {
        self.queue.borrow_mut().push_back(task);
    }
}

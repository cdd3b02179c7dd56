//! Pending task model.
//!
//! A pending task is one unit of work sitting in the single-server FIFO
//! queue. It carries its required service length and a counter of the
//! time steps it spent behind the head of the queue.
//!
//! # Reference
//! Kleinrock (1975), "Queueing Systems, Volume 1: Theory", Ch. 1

use serde::{Deserialize, Serialize};

/// A task waiting for (or receiving) service in the FIFO queue.
///
/// # Time Representation
/// All times are counted in discrete simulation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTask {
    /// Total service steps required (always positive).
    pub service_length: u32,
    /// Steps spent queued behind the head task.
    pub waited_so_far: u64,
}

impl PendingTask {
    /// Creates a freshly arrived task.
    pub fn new(service_length: u32) -> Self {
        Self {
            service_length,
            waited_so_far: 0,
        }
    }

    /// Charges one step of waiting.
    pub fn wait_one_step(&mut self) {
        self.waited_so_far += 1;
    }

    /// Whether `elapsed` service steps complete this task.
    pub fn is_complete_after(&self, elapsed: u32) -> bool {
        elapsed == self.service_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_has_not_waited() {
        let task = PendingTask::new(7);
        assert_eq!(task.service_length, 7);
        assert_eq!(task.waited_so_far, 0);
    }

    #[test]
    fn test_wait_one_step() {
        let mut task = PendingTask::new(3);
        task.wait_one_step();
        task.wait_one_step();
        assert_eq!(task.waited_so_far, 2);
    }

    #[test]
    fn test_completion_requires_exact_service() {
        let task = PendingTask::new(3);
        assert!(!task.is_complete_after(0));
        assert!(!task.is_complete_after(2));
        assert!(task.is_complete_after(3));
    }
}

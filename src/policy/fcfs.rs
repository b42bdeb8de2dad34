use super::{Policy, cumulative_waiting};
use crate::sim::Process;

/// First-Come-First-Served. The caller provides the batch already in
/// arrival order; waiting times are the cumulative sum of earlier bursts.
pub struct Fcfs;

impl Policy for Fcfs {
    fn label(&self) -> String {
        "FCFS".to_owned()
    }

    fn assign_waiting(&self, batch: &mut [Process]) {
        cumulative_waiting(batch);
    }
}

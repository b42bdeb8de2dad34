use super::{Policy, cumulative_waiting};
use crate::sim::Process;

/// Non-preemptive priority scheduling: reorder the batch by descending
/// priority (higher value runs earlier), then apply the same cumulative-sum
/// waiting pass as FCFS over the new order.
///
/// Equal priorities break on arrival time, then on original position (the
/// sort is stable).
pub struct Priority;

impl Policy for Priority {
    fn label(&self) -> String {
        "Priority".to_owned()
    }

    fn assign_waiting(&self, batch: &mut [Process]) {
        batch.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.arrival_time.cmp(&b.arrival_time))
        });
        cumulative_waiting(batch);
    }
}

pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod srtf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use srtf::Srtf;

use crate::sim::Process;

/// A scheduling policy. Each implementation fills in `waiting_time` for
/// every process in the batch; turnaround derivation is shared.
pub trait Policy {
    fn label(&self) -> String;

    fn assign_waiting(&self, batch: &mut [Process]);
}

/// Runs one policy over an exclusively-owned batch: waiting pass first,
/// then the shared turnaround derivation.
pub fn run(policy: &dyn Policy, batch: &mut [Process]) {
    policy.assign_waiting(batch);
    derive_turnaround(batch);
}

/// `turnaround = burst + waiting`, for every process, after any policy.
pub fn derive_turnaround(batch: &mut [Process]) {
    for proc in batch.iter_mut() {
        proc.turnaround_time = proc.burst_time + proc.waiting_time;
    }
}

/// Cumulative-sum waiting over the batch in its current order: the first
/// process waits out its own arrival, every later one waits for everything
/// dispatched before it. Arrival gaps after the first process are ignored;
/// the batch is assumed back-to-back in dispatch order.
pub(crate) fn cumulative_waiting(batch: &mut [Process]) {
    let Some(first) = batch.first_mut() else {
        return;
    };
    first.waiting_time = first.arrival_time;
    for i in 1..batch.len() {
        batch[i].waiting_time = batch[i - 1].waiting_time + batch[i - 1].burst_time;
    }
}

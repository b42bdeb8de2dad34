use super::Policy;
use crate::sim::{Process, RingQueue, Ticks};

pub const DEFAULT_QUANTUM: Ticks = 2;

/// Round robin with a fixed time quantum.
///
/// The ready queue is a [`RingQueue`] of batch indices sized to the batch.
/// Each dispatch runs the head for `min(quantum, remaining)` ticks and
/// charges that slice as waiting time to every other arrived, unfinished
/// process, whether or not it is currently queued. An empty queue advances
/// the clock one tick at a time until the next arrival.
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    pub fn new(quantum: Ticks) -> Self {
        assert!(quantum > 0, "round robin quantum must be positive");
        Self { quantum }
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl Policy for RoundRobin {
    fn label(&self) -> String {
        format!("RR Quantum = {}", self.quantum)
    }

    fn assign_waiting(&self, batch: &mut [Process]) {
        let mut remaining: Vec<Ticks> = batch.iter().map(|proc| proc.burst_time).collect();
        let mut queue = RingQueue::new(batch.len());
        let mut now: Ticks = 0;

        for (idx, proc) in batch.iter().enumerate() {
            if proc.arrival_time <= now {
                queue.enqueue(idx);
            }
        }

        loop {
            match queue.dequeue() {
                Some(current) => {
                    let slice = self.quantum.min(remaining[current]);
                    now += slice;
                    remaining[current] -= slice;

                    for (idx, proc) in batch.iter_mut().enumerate() {
                        if idx != current && proc.arrival_time <= now && remaining[idx] > 0 {
                            proc.waiting_time += slice;
                        }
                    }

                    if remaining[current] > 0 {
                        queue.enqueue(current);
                    }

                    // Admit anything that became eligible while the slice
                    // ran. The queue stays duplicate-free via the linear
                    // membership scan, so capacity n is never exceeded.
                    for (idx, proc) in batch.iter().enumerate() {
                        if idx != current
                            && proc.arrival_time <= now
                            && remaining[idx] > 0
                            && !queue.contains(idx)
                        {
                            queue.enqueue(idx);
                        }
                    }
                }
                None => {
                    if remaining.iter().all(|&rem| rem == 0) {
                        break;
                    }
                    // Idle gap: nothing ready, but arrivals are still due.
                    now += 1;
                    for (idx, proc) in batch.iter().enumerate() {
                        if proc.arrival_time <= now && remaining[idx] > 0 {
                            queue.enqueue(idx);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy;
    use crate::sim::Process;

    #[test]
    fn quantum_two_reference_schedule() {
        let mut batch = vec![
            Process::new(1, 0, 5, 0),
            Process::new(2, 1, 3, 0),
            Process::new(3, 2, 1, 0),
        ];
        policy::run(&RoundRobin::default(), &mut batch);

        let waiting: Vec<_> = batch.iter().map(|p| p.waiting_time).collect();
        let turnaround: Vec<_> = batch.iter().map(|p| p.turnaround_time).collect();
        assert_eq!(waiting, vec![3, 6, 6]);
        assert_eq!(turnaround, vec![8, 9, 7]);
    }

    #[test]
    fn single_process_runs_to_completion() {
        let mut batch = vec![Process::new(1, 0, 5, 0)];
        policy::run(&RoundRobin::default(), &mut batch);

        assert_eq!(batch[0].waiting_time, 0);
        assert_eq!(batch[0].turnaround_time, 5);
    }

    #[test]
    fn idle_gap_before_a_late_arrival() {
        let mut batch = vec![Process::new(1, 3, 2, 0)];
        policy::run(&RoundRobin::default(), &mut batch);

        assert_eq!(batch[0].waiting_time, 0);
        assert_eq!(batch[0].turnaround_time, 2);
    }

    #[test]
    fn gap_between_two_arrival_clusters() {
        let mut batch = vec![Process::new(1, 0, 2, 0), Process::new(2, 7, 3, 0)];
        policy::run(&RoundRobin::default(), &mut batch);

        // Neither process ever shares the CPU.
        assert_eq!(batch[0].waiting_time, 0);
        assert_eq!(batch[1].waiting_time, 0);
    }

    #[test]
    #[should_panic(expected = "quantum must be positive")]
    fn rejects_a_zero_quantum() {
        let _ = RoundRobin::new(0);
    }
}

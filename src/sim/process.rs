pub type Pid = u32;
pub type Ticks = u64;

/// A single process in a batch. Arrival, burst, and priority come from the
/// loader; waiting and turnaround times are filled in by a policy run.
#[derive(Debug, Clone)]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i64,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

impl Process {
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks, priority: i64) -> Self {
        debug_assert!(burst_time > 0, "Process {pid} must have a nonzero burst");
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }
}

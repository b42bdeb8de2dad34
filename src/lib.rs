pub mod loader;
pub mod policy;
pub mod report;
pub mod sim;

pub use policy::{Fcfs, Policy, Priority, RoundRobin, Srtf};
pub use sim::{Pid, Process, RingQueue, Ticks};

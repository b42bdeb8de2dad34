pub mod process;
pub mod queue;

pub use process::{Pid, Process, Ticks};
pub use queue::RingQueue;

use average::{Estimate, Mean};

use crate::sim::Process;

/// Renders the per-policy metrics table: one row per process plus the mean
/// waiting and turnaround times across the batch.
pub fn render(label: &str, batch: &[Process]) -> String {
    let mut out = String::new();
    out.push_str("*********\n");
    out.push_str(label);
    out.push('\n');
    out.push_str("\tProcesses\tBurst time\tWaiting time\tTurn around time\n");
    for proc in batch {
        out.push_str(&format!(
            "\t{}\t\t{}\t\t{}\t\t{}\n",
            proc.pid, proc.burst_time, proc.waiting_time, proc.turnaround_time
        ));
    }

    if batch.is_empty() {
        // Empty batch: no mean to report, and no division by zero.
        out.push_str("\nno processes to report\n");
        return out;
    }

    let waiting: Mean = batch.iter().map(|p| p.waiting_time as f64).collect();
    let turnaround: Mean = batch.iter().map(|p| p.turnaround_time as f64).collect();
    out.push_str(&format!(
        "\nAverage waiting time = {:.2}\n",
        waiting.estimate()
    ));
    out.push_str(&format!(
        "Average turn around time = {:.2}\n",
        turnaround.estimate()
    ));
    out
}

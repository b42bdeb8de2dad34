use super::Policy;
use crate::sim::{Process, Ticks};

/// Per-process simulation state, alongside the batch for the duration of
/// one run.
struct Track {
    remaining: Ticks,
    completion: Option<Ticks>,
}

/// Preemptive Shortest-Remaining-Time-First, reported as "SJF".
///
/// Unit-time simulation: each tick picks the arrived, unfinished process
/// with the least remaining burst and runs it for one tick. A tick with no
/// arrived candidate just advances the clock.
pub struct Srtf;

impl Policy for Srtf {
    fn label(&self) -> String {
        "SJF".to_owned()
    }

    fn assign_waiting(&self, batch: &mut [Process]) {
        let mut tracks: Vec<Track> = batch
            .iter()
            .map(|proc| Track {
                remaining: proc.burst_time,
                completion: None,
            })
            .collect();

        let mut now: Ticks = 0;
        let mut finished = 0;
        while finished < batch.len() {
            // min_by_key keeps the first minimum, so ties fall to the
            // lowest index.
            let candidate = tracks
                .iter()
                .enumerate()
                .filter(|(idx, track)| {
                    track.completion.is_none() && batch[*idx].arrival_time <= now
                })
                .min_by_key(|(_, track)| track.remaining)
                .map(|(idx, _)| idx);

            if let Some(idx) = candidate {
                tracks[idx].remaining -= 1;
                if tracks[idx].remaining == 0 {
                    let completion = now + 1;
                    tracks[idx].completion = Some(completion);
                    batch[idx].waiting_time =
                        completion - batch[idx].arrival_time - batch[idx].burst_time;
                    finished += 1;
                }
            }
            now += 1;
        }
    }
}

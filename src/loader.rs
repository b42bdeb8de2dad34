use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::sim::Process;

/// Reads a batch from a text file: one process per line, four
/// whitespace-separated integers `pid arrival burst priority`. Blank lines
/// and lines starting with `#` are skipped.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("cannot open input file `{}`", path.display()))?;
    parse(BufReader::new(file))
}

pub fn parse(reader: impl BufRead) -> Result<Vec<Process>> {
    let mut batch = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let number = number + 1;
        let line = line.with_context(|| format!("failed to read line {number}"))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            bail!(
                "line {number}: expected `pid arrival burst priority`, got {} fields",
                fields.len()
            );
        }
        let pid = fields[0]
            .parse()
            .with_context(|| format!("line {number}: bad pid `{}`", fields[0]))?;
        let arrival = fields[1]
            .parse()
            .with_context(|| format!("line {number}: bad arrival time `{}`", fields[1]))?;
        let burst = fields[2]
            .parse()
            .with_context(|| format!("line {number}: bad burst time `{}`", fields[2]))?;
        let priority = fields[3]
            .parse()
            .with_context(|| format!("line {number}: bad priority `{}`", fields[3]))?;
        if burst == 0 {
            bail!("line {number}: burst time must be positive");
        }

        batch.push(Process::new(pid, arrival, burst, priority));
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_and_skips_comments() {
        let input = "# pid arrival burst priority\n1 0 5 1\n\n2 1 3 3\n3 2 1 2\n";
        let batch = parse(input.as_bytes()).unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].pid, 1);
        assert_eq!(batch[1].arrival_time, 1);
        assert_eq!(batch[1].burst_time, 3);
        assert_eq!(batch[2].priority, 2);
        assert_eq!(batch[2].waiting_time, 0);
        assert_eq!(batch[2].turnaround_time, 0);
    }

    #[test]
    fn rejects_a_short_line() {
        let err = parse("1 0 5\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn rejects_a_zero_burst() {
        let err = parse("1 0 0 1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("burst time must be positive"));
    }

    #[test]
    fn rejects_a_non_numeric_field() {
        let err = parse("1 zero 5 1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("bad arrival time"));
    }

    #[test]
    fn empty_input_yields_an_empty_batch() {
        let batch = parse("".as_bytes()).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load("/nonexistent/processes.txt").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/processes.txt"));
    }
}

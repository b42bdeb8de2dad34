use std::env;
use std::process::ExitCode;

use anyhow::Result;
use schedsim::policy::{self, Fcfs, Policy, Priority, RoundRobin, Srtf};
use schedsim::{loader, report};

fn main() -> ExitCode {
    let mut args = env::args();
    let argv0 = args.next().unwrap_or_else(|| "schedsim".to_owned());
    let Some(path) = args.next() else {
        eprintln!("Usage: {argv0} <input-file-path>");
        return ExitCode::FAILURE;
    };

    if let Err(err) = run(&path) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(path: &str) -> Result<()> {
    let batch = loader::load(path)?;
    let policies: Vec<Box<dyn Policy>> = vec![
        Box::new(Fcfs),
        Box::new(Srtf),
        Box::new(Priority),
        Box::new(RoundRobin::default()),
    ];

    for selected in &policies {
        // Each policy mutates its own copy of the batch.
        let mut records = batch.clone();
        policy::run(selected.as_ref(), &mut records);
        println!("{}", report::render(&selected.label(), &records));
    }
    Ok(())
}

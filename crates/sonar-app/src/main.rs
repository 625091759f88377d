//! sonar-app: animate a sonar ping between a ship and a submarine.
//!
//! Usage:
//!   sonar-app run --steps 200 --output trace.jsonl
//!   sonar-app print-config --speed 2

use std::fs::File;
use std::io::BufWriter;
use std::process;

use sonar_app::cli::{self, RunArgs};
use sonar_app::sink::{JsonLinesSink, NullSink};
use sonar_app::{AppError, Animator, AnimatorOptions};
use sonar_sim::WaveEngine;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprint!("{}", cli::USAGE);
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "print-config" => cmd_print_config(&args[2..]),
        "help" | "--help" | "-h" => {
            eprint!("{}", cli::USAGE);
            Ok(())
        }
        other => Err(AppError::Usage(format!("Unknown command: {other}"))),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if matches!(e, AppError::Usage(_)) {
            eprint!("{}", cli::USAGE);
        }
        process::exit(1);
    }
}

fn cmd_run(args: &[String]) -> Result<(), AppError> {
    let RunArgs {
        config,
        output,
        realtime,
    } = cli::parse_run_args(args)?;

    let options = AnimatorOptions::from_config(&config, realtime);
    let mut animator = Animator::new(WaveEngine::new(config)?, options);

    let summary = match &output {
        Some(path) => {
            log::info!("writing frame trace to {}", path.display());
            let mut sink = JsonLinesSink::new(BufWriter::new(File::create(path)?));
            animator.run(&mut sink)?
        }
        None => animator.run(&mut NullSink)?,
    };

    if summary.last_status.is_empty() {
        eprintln!(
            "No round trip completed in {} frames (time taken so far: {:.2} seconds)",
            summary.frames, summary.time_taken
        );
    } else {
        eprintln!("{}", summary.last_status);
    }
    Ok(())
}

fn cmd_print_config(args: &[String]) -> Result<(), AppError> {
    let RunArgs { config, .. } = cli::parse_run_args(args)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

//! Command-line parsing for the `sonar-app` binary.

use std::path::PathBuf;

use sonar_core::config::SonarConfig;
use sonar_core::enums::ClockMode;

use crate::error::AppError;

pub const USAGE: &str = "sonar-app: headless sonar ping animator\n\
     \n\
     Commands:\n\
     \n\
     run           Animate the ping and report the final time/depth\n\
     \n\
       --config <path>     JSON config file (optional, defaults otherwise)\n\
       --steps <N>         Frame budget (overrides config)\n\
       --speed <S>         Radius growth per frame (overrides config)\n\
       --arena <A>         Arena size; re-places agents at the edge offsets\n\
       --output <path>     Write one JSON frame snapshot per line\n\
       --realtime          Pace frames at the configured frame interval\n\
       --reference-clock   Derive elapsed time from the frame index\n\
     \n\
     print-config  Print the effective config as JSON (accepts the run options)\n\
     \n\
     Examples:\n\
     \n\
       sonar-app run --steps 200 --output trace.jsonl\n\
       sonar-app print-config --speed 2 --arena 120\n";

/// Parsed `run` / `print-config` options.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub config: SonarConfig,
    pub output: Option<PathBuf>,
    pub realtime: bool,
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, AppError> {
    match flag_value(args, flag) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| AppError::Usage(format!("invalid value for {flag}: {raw}"))),
        None if has_flag(args, flag) => Err(AppError::Usage(format!("{flag} requires a value"))),
        None => Ok(None),
    }
}

/// A path-valued flag. Present without a value (or followed by another flag)
/// is a usage error.
fn parse_path(args: &[String], flag: &str) -> Result<Option<PathBuf>, AppError> {
    match flag_value(args, flag) {
        Some(raw) if !raw.starts_with("--") => Ok(Some(PathBuf::from(raw))),
        _ if has_flag(args, flag) => Err(AppError::Usage(format!("{flag} requires a value"))),
        _ => Ok(None),
    }
}

/// Build the effective configuration from a config file and overrides.
/// The result is validated.
pub fn parse_run_args(args: &[String]) -> Result<RunArgs, AppError> {
    let output = parse_path(args, "--output")?;
    let mut config = match parse_path(args, "--config")? {
        Some(path) => SonarConfig::load(path)?,
        None => SonarConfig::default(),
    };

    if let Some(size) = parse_number::<f64>(args, "--arena")? {
        let placed = SonarConfig::for_arena(size);
        config.arena_size = size;
        config.source = placed.source;
        config.target = placed.target;
    }
    if let Some(speed) = parse_number::<f64>(args, "--speed")? {
        config.speed = speed;
    }
    if let Some(steps) = parse_number::<u64>(args, "--steps")? {
        config.total_steps = steps;
    }
    if has_flag(args, "--reference-clock") {
        config.clock_mode = ClockMode::FrameIndex;
    }
    config.validate()?;

    Ok(RunArgs {
        config,
        output,
        realtime: has_flag(args, "--realtime"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonar_core::types::Position;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_flags() {
        let parsed = parse_run_args(&[]).unwrap();
        assert_eq!(parsed.config, SonarConfig::default());
        assert_eq!(parsed.output, None);
        assert!(!parsed.realtime);
    }

    #[test]
    fn test_overrides() {
        let parsed = parse_run_args(&args(&[
            "--steps",
            "200",
            "--speed",
            "2",
            "--arena",
            "120",
            "--output",
            "trace.jsonl",
            "--realtime",
            "--reference-clock",
        ]))
        .unwrap();
        assert_eq!(parsed.config.total_steps, 200);
        assert_eq!(parsed.config.speed, 2.0);
        assert_eq!(parsed.config.arena_size, 120.0);
        assert_eq!(parsed.config.source, Position::new(98.0, 60.0));
        assert_eq!(parsed.config.target, Position::new(10.0, 60.0));
        assert_eq!(parsed.config.clock_mode, ClockMode::FrameIndex);
        assert_eq!(parsed.output, Some(PathBuf::from("trace.jsonl")));
        assert!(parsed.realtime);
    }

    #[test]
    fn test_bad_number_is_usage_error() {
        let result = parse_run_args(&args(&["--steps", "lots"]));
        assert!(matches!(result, Err(AppError::Usage(_))));
        let result = parse_run_args(&args(&["--speed"]));
        assert!(matches!(result, Err(AppError::Usage(_))));
    }

    #[test]
    fn test_path_flag_without_value_is_usage_error() {
        for list in [
            &["--output"][..],
            &["--output", "--realtime"][..],
            &["--config"][..],
            &["--config", "--steps", "10"][..],
        ] {
            let result = parse_run_args(&args(list));
            assert!(
                matches!(&result, Err(AppError::Usage(msg)) if msg.ends_with("requires a value")),
                "{list:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_invalid_arena_is_config_error() {
        let result = parse_run_args(&args(&["--arena", "-4"]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = parse_run_args(&args(&["--config", "/nonexistent/sonar.json"]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}

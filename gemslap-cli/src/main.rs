mod config;
mod play;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gemslap_audio::{export_wav, ExportOptions};
use gemslap_types::Style;

use config::Config;

const USAGE: &str = "\
usage: gemslap [--verbose] <command>

commands:
  styles                                   list beat styles
  render --out FILE [--style N] [--loops L] [--seed S]
                                           render loops of a style to a WAV file
  play [--style N]                         play live; reads commands from stdin";

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gemslap")
        .join("gemslap.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path)
        .or_else(|_| File::create(std::env::temp_dir().join("gemslap.log")))
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("logging disabled: {}", e);
            return;
        }
    };

    if WriteLogger::init(log_level, simplelog::Config::default(), log_file).is_err() {
        eprintln!("logging disabled: logger already set");
        return;
    }

    log::info!("gemslap starting (log level: {:?})", log_level);
}

/// Value following `flag`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    match flag_value(args, flag) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid value for {}: {}", flag, raw)),
        None => Ok(None),
    }
}

fn list_styles() {
    for style in Style::ALL {
        let swing = if style.swing() > 0.0 {
            format!("  swing {:.0}%", style.swing() * 100.0)
        } else {
            String::new()
        };
        println!("{:>2}  {:<16} {:>3} bpm{}", style.id(), style.name(), style.tempo(), swing);
    }
}

fn render(args: &[String], config: &Config) -> Result<(), String> {
    let out = flag_value(args, "--out").ok_or("render needs --out FILE")?;
    let mut engine = config.engine();
    if let Some(seed) = parse_flag::<u64>(args, "--seed")? {
        engine.seed = seed;
    }
    let opts = ExportOptions {
        style: parse_flag(args, "--style")?.unwrap_or_else(|| config.default_style()),
        loops: parse_flag(args, "--loops")?.unwrap_or_else(|| config.export_loops()),
        sample_rate: config.export_sample_rate(),
        config: engine,
        ..ExportOptions::default()
    };

    let style = Style::wrapping(opts.style);
    println!(
        "rendering {} loop(s) of {} at {} bpm to {}",
        opts.loops,
        style.name(),
        style.tempo(),
        out
    );
    let summary = export_wav(Path::new(out), &opts)?;
    println!(
        "{} frames ({:.1} s), {} steps, peak {:.3}",
        summary.frames,
        summary.frames as f64 / f64::from(opts.sample_rate),
        summary.steps,
        summary.peak
    );
    Ok(())
}

fn run(args: &[String]) -> Result<(), String> {
    let config = Config::load();
    let command = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with('-'))
        .map(String::as_str);

    match command {
        Some("styles") => {
            list_styles();
            Ok(())
        }
        Some("render") => render(args, &config),
        Some("play") => {
            let style = parse_flag(args, "--style")?.unwrap_or_else(|| config.default_style());
            play::run(&config, style)
        }
        _ => Err(USAGE.to_string()),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flag_values() {
        let a = args(&["gemslap", "render", "--style", "3", "--out", "x.wav"]);
        assert_eq!(flag_value(&a, "--out"), Some("x.wav"));
        assert_eq!(parse_flag::<u32>(&a, "--style"), Ok(Some(3)));
        assert_eq!(parse_flag::<u32>(&a, "--loops"), Ok(None));
    }

    #[test]
    fn test_bad_flag_value_is_reported() {
        let a = args(&["gemslap", "render", "--loops", "lots"]);
        let err = parse_flag::<u32>(&a, "--loops").unwrap_err();
        assert!(err.contains("--loops"));
    }

    #[test]
    fn test_command_skips_leading_flags() {
        let a = args(&["gemslap", "--verbose", "styles"]);
        let command = a.iter().skip(1).find(|a| !a.starts_with('-'));
        assert_eq!(command.map(String::as_str), Some("styles"));
    }
}

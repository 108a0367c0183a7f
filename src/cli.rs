use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use swarm_forecast::config::RunConfig;

/// Parsed command-line options. Every field except the config source
/// overrides the matching config value when present.
#[derive(Debug, Default)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub preset: Option<String>,
    pub data: Option<PathBuf>,
    pub column: Option<usize>,
    pub train_len: Option<usize>,
    pub horizon: Option<usize>,
    pub particles: Option<usize>,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    pub forecast_out: Option<PathBuf>,
    pub trace_out: Option<PathBuf>,
    #[cfg(feature = "api")]
    pub serve: bool,
    #[cfg(feature = "api")]
    pub port: Option<u16>,
}

impl CliOptions {
    /// Writes the command-line overrides into `config`.
    pub fn apply(&self, config: &mut RunConfig) {
        if let Some(path) = &self.data {
            config.data.path = Some(path.clone());
        }
        if let Some(column) = self.column {
            config.data.column = column;
        }
        if let Some(train_len) = self.train_len {
            config.data.train_len = train_len;
        }
        if let Some(horizon) = self.horizon {
            config.data.holdout_len = horizon;
        }
        if let Some(particles) = self.particles {
            config.swarm.particles = particles;
        }
        if let Some(iterations) = self.iterations {
            config.swarm.iterations = iterations;
        }
        if self.seed.is_some() {
            config.swarm.seed = self.seed;
        }
        if let Some(path) = &self.forecast_out {
            config.output.forecast_out = Some(path.clone());
        }
        if let Some(path) = &self.trace_out {
            config.output.trace_out = Some(path.clone());
        }
    }
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    if args.len() == 1 && (args[0] == "--help" || args[0] == "-h") {
        print_usage();
        std::process::exit(0);
    }
    parse_options(&args)
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut opts = CliOptions::default();

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --config (expected a TOML file path)",
                )?;
                if opts.config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name = args.next_or_err(
                    i,
                    "missing value for --preset (expected a preset name)",
                )?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--data" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --data (expected a CSV file path)",
                )?;
                opts.data = Some(PathBuf::from(path));
            }
            "--column" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --column")?;
                opts.column = Some(parse_value(flag, raw)?);
            }
            "--train-len" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --train-len")?;
                opts.train_len = Some(parse_value(flag, raw)?);
            }
            "--horizon" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --horizon")?;
                opts.horizon = Some(parse_value(flag, raw)?);
            }
            "--particles" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --particles")?;
                opts.particles = Some(parse_value(flag, raw)?);
            }
            "--iterations" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --iterations")?;
                opts.iterations = Some(parse_value(flag, raw)?);
            }
            "--seed" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --seed")?;
                opts.seed = Some(parse_value(flag, raw)?);
            }
            "--forecast-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --forecast-out (expected a file path)",
                )?;
                opts.forecast_out = Some(PathBuf::from(path));
            }
            "--trace-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --trace-out (expected a file path)",
                )?;
                opts.trace_out = Some(PathBuf::from(path));
            }
            #[cfg(feature = "api")]
            "--serve" => {
                opts.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --port")?;
                opts.port = Some(parse_value(flag, raw)?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.config.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--config` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    Ok(opts)
}

fn parse_value<T: FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse().map_err(|_| {
        format!(
            "{flag} value \"{raw}\" is not a valid {}",
            std::any::type_name::<T>()
        )
    })
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("swarm-forecast: fit a particle swarm to a series and forecast it");
    eprintln!();
    eprintln!("Usage: swarm-forecast [--config <path> | --preset <name>] [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load run configuration from a TOML file");
    eprintln!(
        "  --preset <name>          Use a built-in preset ({})",
        RunConfig::PRESETS.join(", ")
    );
    eprintln!("  --data <path>            CSV file holding the series");
    eprintln!("  --column <usize>         Zero-based column to read (default: 1)");
    eprintln!("  --train-len <usize>      Number of training values (default: 600)");
    eprintln!("  --horizon <usize>        Number of values to forecast (default: 30)");
    eprintln!("  --particles <usize>      Swarm size (default: 30)");
    eprintln!("  --iterations <usize>     Iteration count (default: 100)");
    eprintln!("  --seed <u64>             Fix the random seed");
    eprintln!("  --forecast-out <path>    Export the forecast table to CSV");
    eprintln!("  --trace-out <path>       Export the convergence trace to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after the run");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If neither --config nor --preset is given, the default preset is used.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn supports_config_cli() {
        let opts = parse_args_from(args(&["--config", "run.toml"])).expect("parse should succeed");
        assert_eq!(
            opts.config.as_deref().and_then(|p| p.to_str()),
            Some("run.toml")
        );
        assert!(opts.preset.is_none());
    }

    #[test]
    fn config_and_preset_are_exclusive() {
        let err = parse_args_from(args(&["--config", "a.toml", "--preset", "quick"])).unwrap_err();
        assert!(err.contains("mutually exclusive"));
    }

    #[test]
    fn numeric_overrides_are_parsed() {
        let opts = parse_args_from(args(&[
            "--data",
            "prices.csv",
            "--particles",
            "12",
            "--iterations",
            "0",
            "--seed",
            "99",
            "--horizon",
            "10",
        ]))
        .expect("parse should succeed");
        assert_eq!(opts.particles, Some(12));
        assert_eq!(opts.iterations, Some(0));
        assert_eq!(opts.seed, Some(99));
        assert_eq!(opts.horizon, Some(10));
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = parse_args_from(args(&["--particles", "-5"])).unwrap_err();
        assert!(err.contains("--particles"));
    }

    #[test]
    fn missing_value_is_reported() {
        let err = parse_args_from(args(&["--seed"])).unwrap_err();
        assert!(err.contains("missing value for --seed"));
    }

    #[test]
    fn unknown_argument_is_rejected() {
        let err = parse_args_from(args(&["--clamp"])).unwrap_err();
        assert!(err.contains("unknown argument"));
    }

    #[test]
    fn apply_overrides_config() {
        let opts = parse_args_from(args(&["--data", "x.csv", "--train-len", "50", "--seed", "3"]))
            .expect("parse should succeed");
        let mut cfg = RunConfig::standard();
        opts.apply(&mut cfg);
        assert_eq!(cfg.data.path.as_deref().and_then(|p| p.to_str()), Some("x.csv"));
        assert_eq!(cfg.data.train_len, 50);
        assert_eq!(cfg.swarm.seed, Some(3));
        assert_eq!(cfg.swarm.particles, 30);
    }
}

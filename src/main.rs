//! swarm-forecast entry point: CLI wiring, config loading, and output.

mod cli;

use std::path::Path;
use std::process;

use log::info;
use swarm_forecast::config::RunConfig;
use swarm_forecast::io::export::{export_forecast_csv, export_trace_csv};
use swarm_forecast::runner;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    // --config takes priority, then --preset, then the default preset
    let mut config = if let Some(ref path) = cli.config {
        match RunConfig::from_toml_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match RunConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        RunConfig::standard()
    };

    cli.apply(&mut config);

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let output = match runner::run(&config) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    info!("run complete");

    println!("{}", output.report);

    if let Some(ref path) = config.output.forecast_out {
        write_or_exit(export_forecast_csv(&output.report, path), path, "forecast");
    }
    if let Some(ref path) = config.output.trace_out {
        write_or_exit(export_trace_csv(&output.result.history, path), path, "trace");
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(swarm_forecast::api::AppState { config, output });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port.unwrap_or(3000)));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(swarm_forecast::api::serve(state, addr)) {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn write_or_exit(result: swarm_forecast::error::Result<()>, path: &Path, what: &str) {
    if let Err(e) = result {
        eprintln!("error: failed to write {what} CSV: {e}");
        process::exit(1);
    }
    eprintln!("{what} written to {}", path.display());
}

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use sssp_graph_gen::cli::{run_cli, Cli, CliError};
use sssp_graph_gen::logging;
use tracing::{error, info};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        // tracing is not available yet
        eprintln!("failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse_normalized();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let result = run_cli(&cli, &mut writer)
        .and_then(|summary| writer.flush().map(|_| summary).map_err(CliError::Stdout));

    match result {
        Ok(summary) => {
            info!(
                seed = summary.seed,
                vertices = summary.vertices,
                edges = summary.edges,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "graph generation failed");
            ExitCode::FAILURE
        }
    }
}

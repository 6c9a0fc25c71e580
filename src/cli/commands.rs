use crate::config::RuntimeConfig;
use crate::diagnostics::{
    has_failures, render_json, render_text, Diagnostic, DiagnosticSink, Severity, TracingSink,
};
use crate::driver;
use crate::logging::init_logging;
use crate::markers::SUPPORTED_MARKERS;
use crate::model::load_unit;
use crate::session::AnalysisSession;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Command-line interface for routecheck
#[derive(Parser)]
#[command(name = "routecheck")]
#[command(about = "Static checks for annotation-declared HTTP routes", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check the route declarations of an analysis unit
    ///
    /// Reports:
    /// - duplicate verb/path combinations across declarations
    /// - @PathVariable parameters that do not match the route template
    /// - controllers without endpoints and endpoints outside controllers
    /// - malformed route marker arguments
    Check {
        /// Path to the analysis unit document (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Hide plain warnings (errors and mandatory warnings are still shown)
        #[arg(long, default_value_t = false)]
        errors_only: bool,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Count warnings as errors for --fail-on-error
        #[arg(long, default_value_t = false)]
        deny_warnings: bool,
    },
    /// List the marker types the checker handles
    Markers,
}

/// Report format of the `check` command
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable, grouped by severity
    Text,
    /// JSON array of diagnostics
    Json,
}

/// Parse arguments, set up logging and execute the command
///
/// # Errors
///
/// Returns an error if logging cannot be initialised, the analysis unit cannot
/// be loaded, or the report cannot be written.
pub fn run_cli() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = RuntimeConfig::from_env();
    init_logging(&config)?;
    let failed = run_command(&cli.command, &config, &mut std::io::stdout())?;
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Execute one command, writing its report to `out`
///
/// Returns `true` when the run should exit with a failure status.
pub fn run_command(
    command: &Commands,
    config: &RuntimeConfig,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    match command {
        Commands::Check {
            input,
            format,
            errors_only,
            fail_on_error,
            deny_warnings,
        } => {
            let unit = load_unit(input)?;
            let mut session = AnalysisSession::new();
            let mut diagnostics: Vec<Diagnostic> = Vec::new();
            driver::run(&unit, &mut session, &mut diagnostics)?;

            if tracing::enabled!(Level::DEBUG) {
                let mut log = TracingSink::new(&unit);
                for diagnostic in &diagnostics {
                    log.emit(diagnostic.clone());
                }
            }

            let deny_warnings = *deny_warnings || config.deny_warnings;
            let failed = *fail_on_error && has_failures(&diagnostics, deny_warnings);

            // mandatory warnings survive --errors-only
            if *errors_only {
                diagnostics.retain(|d| d.severity != Severity::Warning);
            }

            match format {
                OutputFormat::Text => write!(out, "{}", render_text(&unit, &diagnostics))?,
                OutputFormat::Json => writeln!(out, "{}", render_json(&unit, &diagnostics)?)?,
            }

            Ok(failed)
        }
        Commands::Markers => {
            for marker in SUPPORTED_MARKERS {
                writeln!(out, "{}", marker)?;
            }
            Ok(false)
        }
    }
}

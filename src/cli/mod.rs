//! # CLI Module
//!
//! Command-line interface for the route checker.
//!
//! ## Commands
//!
//! ### `check`
//!
//! Load an analysis unit and report route problems:
//!
//! ```bash
//! routecheck check --input routes.yaml
//! ```
//!
//! Options:
//! - `--input <FILE>` - Analysis unit document, YAML or JSON (required)
//! - `--format <FORMAT>` - `text` (default) or `json`
//! - `--errors-only` - Hide plain warnings; mandatory warnings stay
//! - `--fail-on-error` - Exit with status 1 when errors remain
//! - `--deny-warnings` - With `--fail-on-error`, warnings fail the run too
//!
//! ### `markers`
//!
//! List the marker types the checker needs declarations for:
//!
//! ```bash
//! routecheck markers
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use routecheck::cli::{Cli, run_command};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! let failed = run_command(&cli.command, &config, &mut std::io::stdout())?;
//! ```

mod commands;


pub use commands::{run_cli, run_command, Cli, Commands, OutputFormat};

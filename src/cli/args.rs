//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. There are no subcommands:
//! the whole surface is one positional file plus flags.

use clap::Parser;
use std::path::PathBuf;

/// UXRay - Static accessibility auditor for JSX/TSX component files.
#[derive(Debug, Parser)]
#[command(name = "uxray")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the component source file to audit
    #[arg(value_name = "FILE", required_unless_present = "list_rules")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub audit: AuditArgs,

    /// List registered rules and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Arguments controlling the audit run and report export.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AuditArgs {
    /// Export the audit result to a report file: json or md
    #[arg(long, value_name = "FORMAT")]
    pub report: Option<String>,

    /// Report output path (default: uxray-report.<format>)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Disable rules by name (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub disable: Vec<String>,

    /// Exit non-zero when any error-severity violation is found
    #[arg(long)]
    pub strict: bool,
}

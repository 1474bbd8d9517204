use clap::{ArgGroup, Parser};
use depscore::application::dto::OutputFormat;
use depscore::package_scoring::domain::Grade;
use std::path::PathBuf;

/// Score npm packages from dependency-scan reports
///
/// The report is either a JSON file saved from `/api/v1/package` or fetched
/// from the API with `--package` and `--package-version`.
#[derive(Parser, Debug)]
#[command(name = "depscore")]
#[command(version)]
#[command(about = "Risk score and grade for npm packages from dependency-scan reports", long_about = None)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["report", "package"])
))]
pub struct Args {
    /// Path to a package report JSON file
    #[arg(value_name = "REPORT")]
    pub report: Option<PathBuf>,

    /// npm package name to fetch from the API (e.g. @hapi/hapi)
    #[arg(short, long, requires = "package_version")]
    pub package: Option<String>,

    /// Version of the package to fetch from the API
    #[arg(long = "package-version", value_name = "VERSION", requires = "package")]
    pub package_version: Option<String>,

    /// Base URL of the scoring API [default: http://localhost:8000]
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Output format: json or markdown [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include the per-term score explanation
    #[arg(long)]
    pub breakdown: bool,

    /// Recompute dependency totals from the nested dependency reports
    #[arg(long)]
    pub aggregate: bool,

    /// Exit with code 1 when the package grade is worse than this (A-E)
    #[arg(long, value_name = "GRADE")]
    pub min_grade: Option<Grade>,

    /// Path to a config file (defaults to ./depscore.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

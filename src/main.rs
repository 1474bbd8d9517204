mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, unknown_field_warnings, Settings};
use depscore::adapters::outbound::console::{
    format_grade_summary, should_use_colors, StderrProgressReporter,
};
use depscore::adapters::outbound::filesystem::FileSystemReader;
use depscore::adapters::outbound::network::ApiReportClient;
use depscore::application::dto::{ScoreRequest, ScoreResponse};
use depscore::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use depscore::application::read_models::ScoreReadModelBuilder;
use depscore::application::use_cases::ScorePackageUseCase;
use depscore::package_scoring::domain::Package;
use depscore::ports::outbound::{OutputPresenter, ProgressReporter, ReportProvider, ScoreFormatter};
use depscore::shared::error::ExitCode;
use depscore::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let progress_reporter = StderrProgressReporter::new();

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    if let Some(config) = &config {
        for warning in unknown_field_warnings(config) {
            progress_reporter.report_error(&warning);
        }
    }
    let settings = Settings::resolve(&args, config.as_ref())?;

    let request = ScoreRequest::new(settings.breakdown, settings.aggregate, settings.min_grade);

    let response = match (&args.report, &args.package, &args.package_version) {
        (Some(path), _, _) => score(
            FileSystemReader::new(path.clone()),
            &progress_reporter,
            request,
        )?,
        (None, Some(name), Some(version)) => {
            let package = Package::new(name.clone(), version.clone())?;
            score(
                ApiReportClient::new(settings.api_url.clone(), package)?,
                &progress_reporter,
                request,
            )?
        }
        // clap's "source" group guarantees one of the two forms
        _ => anyhow::bail!("Either a report file or --package with --package-version is required"),
    };

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let model = ScoreReadModelBuilder::build(&response);
    let formatted_output = FormatterFactory::create(settings.format).format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted_output)?;

    progress_reporter.report_completion(&format_grade_summary(
        &response.package.report.package().to_string(),
        response.package.result.total_score,
        response.package.result.grade,
        should_use_colors(),
    ));

    if response.is_below_minimum() {
        if let Some(min_grade) = response.min_grade {
            progress_reporter.report_error(&format!(
                "❌ Grade {} is worse than the minimum grade {}",
                response.package.result.grade, min_grade
            ));
        }
        return Ok(ExitCode::GradeBelowMinimum);
    }

    Ok(ExitCode::Success)
}

fn score<P: ReportProvider>(
    provider: P,
    progress_reporter: &StderrProgressReporter,
    request: ScoreRequest,
) -> Result<ScoreResponse> {
    ScorePackageUseCase::new(provider, progress_reporter).execute(request)
}

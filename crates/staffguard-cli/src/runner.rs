use anyhow::Result;
use chrono::Local;
use staffguard_core::{Pipeline, PipelineReport, SalesSummary, SnapshotOutcome};
use staffguard_reports::{JsonFormatter, Reporter, StdOutFormatter};

use crate::{
    Args, Command, OutputFormat,
    errors::CliError,
    parser::{Config, parse_config},
    rules_doc::print_rules_documentation,
    writer::{resolve_file_path, write_report},
};

pub fn run(args: Args) -> Result<()> {
    let mut config = parse_config(args.config.as_deref())?;

    match args.command {
        Command::Run {
            source,
            snapshot,
            strict,
            report,
        } => {
            apply_overrides(&mut config, source, snapshot);
            run_pipeline(&config, args.output, strict, report.as_deref())
        }
        Command::Kpi {
            source,
            snapshot,
            workbook,
        } => {
            apply_overrides(&mut config, source, snapshot);
            if workbook.is_some() {
                config.sales.workbook = workbook;
            }
            run_kpi(&config, args.output)
        }
        Command::Rules => {
            print_rules_documentation();
            Ok(())
        }
    }
}

fn apply_overrides(config: &mut Config, source: Option<String>, snapshot: Option<String>) {
    if let Some(source) = source {
        config.pipeline.source = source;
    }
    if let Some(snapshot) = snapshot {
        config.pipeline.clean_snapshot = snapshot;
    }
}

fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn drive<R: Reporter>(reporter: &mut R, pipeline: &Pipeline) -> PipelineReport {
    reporter.on_start();
    reporter.on_loading(pipeline.source_path());
    let report = pipeline.run();
    reporter.on_report(&report);
    reporter.on_complete(&report);
    report
}

pub fn run_pipeline(
    config: &Config,
    output: OutputFormat,
    strict: bool,
    report_path: Option<&str>,
) -> Result<()> {
    let pipeline = Pipeline::new(config.pipeline.to_pipeline_config()?);

    let report = match output {
        OutputFormat::Stdout => {
            let mut formatter = StdOutFormatter::new(version());
            drive(&mut formatter, &pipeline)
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version());
            let report = drive(&mut formatter, &pipeline);
            println!("{}", formatter.to_json()?);
            report
        }
    };

    if let Some(path) = report_path {
        let mut formatter = JsonFormatter::new(version());
        formatter.on_report(&report);
        let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
        let path = resolve_file_path(Some(path), &timestamp)?;
        write_report(&path, &formatter.to_json()?)?;
    }

    if let SnapshotOutcome::Failed(message) = &report.snapshot {
        if strict {
            return Err(CliError::SnapshotFailed {
                message: message.clone(),
            }
            .into());
        }
        log::warn!("Continuing without a clean snapshot");
    }
    Ok(())
}

pub fn run_kpi(config: &Config, output: OutputFormat) -> Result<()> {
    let pipeline = Pipeline::new(config.pipeline.to_pipeline_config()?);
    let departments = pipeline.department_map();

    let sales = config
        .sales
        .workbook
        .as_ref()
        .map(|workbook| SalesSummary::from_workbook(workbook, &departments));

    match output {
        OutputFormat::Stdout => {
            let mut formatter = StdOutFormatter::new(version());
            formatter.on_start();
            formatter.on_lookup(departments.len(), sales.as_ref());
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version());
            formatter.on_lookup(departments.len(), sales.as_ref());
            println!("{}", formatter.to_json()?);
        }
    }
    Ok(())
}

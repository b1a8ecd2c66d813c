mod analyze;
mod azure;
mod model;
mod report;
mod utils;

use crate::analyze::{aggregate_by_contributor, ScanProgress};
use crate::azure::AzureClient;
use crate::model::{Result, ScanConfig, ScanError};
use crate::report::{ChartData, HtmlReport, MarkdownReport};
use crate::utils::{MultiProgressNew, ProgressStyleTemplate};
use chrono::NaiveDate;
use clap::Parser;
use indicatif::{MultiProgress, ProgressBar};
use std::process::ExitCode;

#[derive(Parser, Debug, Clone)]
struct Args {
    #[arg(long = "organization")]
    organization: String,
    #[arg(long = "project")]
    project: String,
    #[arg(long = "token")]
    access_token: String,
    /// Only activity on or after this date is counted (YYYY-MM-DD).
    #[arg(long = "from_date")]
    from_date: NaiveDate,
    #[arg(long = "chart", default_value = "contributions.html")]
    chart_path: String,
    #[arg(long = "report", default_value = "contributions.md")]
    report_path: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(ScanError::Validation(field)) => {
            eprintln!("Please enter a value for the {field}.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Scan failed: {err}");
            eprintln!(
                "Please check that the organization, project name and personal access token are correct and valid."
            );
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = ScanConfig::new(
        &args.organization,
        &args.project,
        &args.access_token,
        args.from_date,
    )?;
    let client = AzureClient::new(&config)?;

    let multi_progress = MultiProgress::default();
    let scan_pb = multi_progress.add_with_style(
        ProgressBar::new_spinner(),
        ProgressStyleTemplate::only_message(),
    );
    scan_pb.set_message("Scanning ...");

    let progress_pb = scan_pb.clone();
    let progress: ScanProgress = Box::new(move |message| {
        progress_pb.set_message(message.to_string());
    });

    let stats = match aggregate_by_contributor(&client, progress).await {
        Ok(stats) => stats,
        Err(err) => {
            scan_pb.finish_and_clear();
            return Err(err);
        }
    };
    scan_pb.finish_with_message(format!(
        "✅ Completed scan (find {} contributors)",
        stats.len()
    ));

    println!("Contribution totals: {stats:#?}");

    let chart = ChartData::project(&stats);
    chart.report_create(&args.chart_path)?;
    stats.report_create(&args.report_path)?;
    println!("Chart written to `{}`", args.chart_path);
    println!("Report written to `{}`", args.report_path);

    Ok(())
}

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use runsheet::api::RunsheetApi;
use runsheet::commands::{self, BatchReport, GenerateReport, UpdateOptions, UpdateReport};
use runsheet::config::RunsheetConfig;
use runsheet::error::Result;
use runsheet::model::{ExecutionUpdate, FieldEdit};
use runsheet::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = RunsheetConfig::load().unwrap_or_default();
    let workbook_path: PathBuf = config.resolve_workbook(cli.file.as_deref());
    let mut api = RunsheetApi::new(FileStore::new(workbook_path));

    match cli.command {
        Commands::Update {
            sheet,
            test_id,
            result,
            observed,
            executed_by,
            date,
            comments,
            backup,
        } => {
            let update = ExecutionUpdate::new(result)
                .with_observed(FieldEdit::from(observed))
                .with_executed_by(FieldEdit::from(executed_by))
                .with_date(FieldEdit::from(date))
                .with_comments(FieldEdit::from(comments));
            let options = UpdateOptions {
                create_backup: backup,
            };

            println!("Updating test execution for {} in {}...", test_id, sheet);
            let report = api.update(&sheet, &test_id, &update, &options)?;
            println!("\n{}", "Test execution updated successfully".green());
            print_update_report(&report);
        }
        Commands::Reset {
            sheet,
            test_id,
            backup,
        } => {
            let options = UpdateOptions {
                create_backup: backup,
            };

            println!("Resetting test execution for {} in {}...", test_id, sheet);
            let report = api.reset(&sheet, &test_id, &options)?;
            println!("\n{}", "Test execution reset successfully".green());
            print_update_report(&report);
        }
        Commands::Batch { spec, backup } => {
            let content = fs::read_to_string(&spec)?;
            let spec = commands::batch::BatchSpec::parse(&content)?;
            let options = UpdateOptions {
                create_backup: backup || spec.options.create_backup,
            };

            println!(
                "Processing batch update with {} updates...",
                spec.updates.len()
            );
            let report = api.batch(&spec.updates, &options)?;
            print_batch_report(&report);
        }
        Commands::Sheets => {
            println!("Available sheets:");
            for sheet in api.sheets()? {
                println!("  - {}", sheet);
            }
        }
        Commands::Ids { sheet } => {
            let ids = api.ids(&sheet)?;
            println!("Test case IDs in {}:", sheet);
            for id in ids {
                println!("  - {}", id);
            }
        }
        Commands::Show { sheet, test_id } => match api.record(&sheet, &test_id)? {
            Some(record) => {
                println!("Test case details for {}:", test_id);
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
            None => println!("Test case {} not found in {}", test_id, sheet),
        },
        Commands::Generate { force } => {
            println!("Generating test scenario workbook...");
            let report = api.generate(force)?;
            print_generate_report(&report);
        }
    }

    Ok(())
}

fn print_update_report(report: &UpdateReport) {
    println!("\nDetails:");
    println!("  Sheet: {}", report.sheet);
    println!("  Test Case ID: {}", report.id);

    println!("\nUpdated fields:");
    for change in &report.changes {
        let shown = if change.new.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            change.new.clone()
        };
        println!("  {}: {}", change.field, shown);
    }

    let had_previous = report.changes.iter().any(|c| !c.previous.is_empty());
    if had_previous {
        println!("\nPrevious values:");
        for change in &report.changes {
            if !change.previous.is_empty() {
                println!("  {}: {}", change.field, change.previous);
            }
        }
    }

    if let Some(backup) = &report.backup {
        println!("\nBackup created: {}", backup.display());
    }
}

fn print_batch_report(report: &BatchReport) {
    println!("\nBatch update complete:");
    println!("  Total updates: {}", report.total());
    println!("  Successful: {}", report.success_count().to_string().green());
    println!("  Failed: {}", report.error_count().to_string().red());

    if let Some(backup) = &report.backup {
        println!("  Backup created: {}", backup.display());
    }

    if !report.errors.is_empty() {
        println!("\nErrors:");
        for err in &report.errors {
            println!("  - {}/{}: {}", err.sheet, err.id, err.error.red());
        }
    }

    if !report.results.is_empty() {
        println!("\nSuccessful updates:");
        for res in &report.results {
            let result = res
                .change(runsheet::model::ExecutionField::Result)
                .map(|c| c.new.as_str())
                .unwrap_or("-");
            println!("  - {}/{}: {}", res.sheet, res.id, result);
        }
    }
}

fn print_generate_report(report: &GenerateReport) {
    if let Some(path) = &report.path {
        println!(
            "\n{} Workbook created at: {}",
            "OK".green(),
            path.display()
        );
    }
    println!("\nFile contains the following sheets:");
    for (i, (name, count)) in report.sheets.iter().enumerate() {
        println!("  {}. {} - {} test scenarios", i + 1, name, count);
    }
    println!("\nTotal: {} test scenarios", report.total_scenarios());
}

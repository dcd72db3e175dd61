use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::process::{PayrollBatch, RunSettings, build_reports};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::{parse_date_arg, today};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use std::collections::HashSet;

/// Handle the `process` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        files,
        start,
        wage_date,
        no_wage_split,
        out,
        format,
        no_archive,
        force,
    } = cmd
    {
        let settings = RunSettings {
            pay_period_start: match start {
                Some(s) => parse_date_arg(s)?,
                None => today(),
            },
            wage_change: if *no_wage_split || (!cfg.wage_split && wage_date.is_none()) {
                None
            } else {
                Some(parse_date_arg(
                    wage_date.as_deref().unwrap_or(&cfg.wage_change_date),
                )?)
            },
        };

        info(format!(
            "Pay period starting {} ({} files)",
            settings.pay_period_start,
            files.len()
        ));

        let batch = PayrollBatch::load(files.as_slice());
        if batch.is_empty() {
            warning("No valid data was extracted. Please check your files.");
            return Ok(());
        }

        print_store_summary(&batch);

        let reports = build_reports(&batch, &settings);
        let dir = expand_tilde(out.as_deref().unwrap_or(&cfg.output_dir));
        let archive = (!*no_archive && cfg.archive).then_some(cfg.archive_name.as_str());
        let format = format.unwrap_or(cfg.export_format);
        info(format!("Writing {} output to {}", format.as_str(), dir.display()));

        let written = ExportLogic::export(&reports, &dir, format, archive, *force)?;

        success(format!(
            "Processing complete! Processed {} stores, {} output file(s).",
            batch.stores.len(),
            written.len()
        ));
    }
    Ok(())
}

fn print_store_summary(batch: &PayrollBatch) {
    header("Stores");

    let mut table = Table::with_headers(&["store", "employees", "punches", "hours"]);
    for store in batch.stores.values() {
        let employees: HashSet<&str> = store.punches().map(|r| r.employee_id.as_str()).collect();
        let hours: f64 = store.punches().map(|r| r.hours()).sum();
        table.add_row(vec![
            store.store_id.clone(),
            employees.len().to_string(),
            store.punches().count().to_string(),
            format!("{hours:.2}"),
        ]);
    }

    print!("{}", table.render());
}

use crate::cli::parser::Commands;
use crate::core::process::ingest_file;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::error;
use crate::utils::table::Table;
use std::fs;

/// Handle the `detect` subcommand: parse without aggregating.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Detect { files } = cmd {
        let mut table = Table::with_headers(&["file", "layout", "stores", "records"]);

        for name in files {
            let outcome = fs::read(name)
                .map_err(AppError::from)
                .and_then(|bytes| ingest_file(name, &bytes));

            match outcome {
                Ok(o) => table.add_row(vec![
                    name.clone(),
                    o.dialect.to_string(),
                    if o.store_ids.is_empty() {
                        "-".to_string()
                    } else {
                        o.store_ids.join(", ")
                    },
                    o.usable_count().to_string(),
                ]),
                Err(e) => error(format!("{name}: {e}")),
            }
        }

        print!("{}", table.render());
    }
    Ok(())
}

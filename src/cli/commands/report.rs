use crate::api::ClickUpClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ReportEngine, ReportRequest, ReportSettings, ReportTable};
use crate::errors::AppResult;
use crate::export::{ensure_writable, write_report};
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_range;
use crate::utils::path::{output_dir, output_path};
use crate::utils::table::Table;

/// Handle the `report` command.
///
/// Arguments are validated before any request reaches the service.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        employee,
        start,
        end,
        format,
        dir,
        preview,
        force,
    } = cmd
    {
        let (start, end) = parse_range(start, end)?;
        let request = ReportRequest::new(employee, start, end)?;
        let settings = ReportSettings::from_config(cfg)?;

        let client = ClickUpClient::new(cfg)?;
        info(format!(
            "Building report for {} ({} → {})",
            request.employee_code, request.start, request.end
        ));

        let engine = ReportEngine::new(settings, &client, &client, &client);
        let report = engine.generate(&request)?;

        for d in &report.diagnostics {
            warning(d);
        }

        if *preview {
            print!("{}", preview_table(&report.table).render());
        }

        let dir = output_dir(dir.as_deref(), &cfg.output_dir);
        let path = output_path(&dir, &format.file_name(&report));
        ensure_writable(&path, *force)?;
        write_report(&report, *format, &path)?;
    }
    Ok(())
}

fn preview_table(table: &ReportTable) -> Table {
    let mut out = Table::new(table.columns.clone());
    for cells in &table.rows {
        out.add_row(cells.iter().map(|c| c.render()).collect());
    }
    out
}

//! Headless output
//!
//! `--print` waits for the dataset, runs the pipeline once with the initial
//! selection and writes the rows to stdout as a table.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::api::Country;
use crate::logic::formatting;
use crate::model::SelectionState;
use crate::services::{loader, DatasetSource};

const HEADERS: [&str; 7] = ["#", "Country", "Code", "Capital", "Population", "Area", "Continents"];

pub async fn run(source: &DatasetSource, selection: &SelectionState) -> Result<()> {
    let response = loader::load_dataset(source).await;

    // A failed load behaves like the TUI: an empty dataset, not an exit
    let countries = response.countries.unwrap_or_else(|e| {
        tracing::warn!("showing empty table: {:#}", e);
        Vec::new()
    });

    let rows = crate::logic::pipeline::evaluate(&countries, selection);
    tracing::debug!(shown = rows.len(), loaded = countries.len(), "pipeline evaluated");

    println!("{}", build_table(&rows));
    Ok(())
}

/// Table of the displayed rows, in display order
pub fn build_table(rows: &[&Country]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = HEADERS.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
    table.set_header(header_cells);

    for (idx, country) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&country.name),
            Cell::new(country.code.as_deref().unwrap_or("-")),
            Cell::new(formatting::format_list(&country.capital)),
            Cell::new(formatting::format_population(country.population)),
            Cell::new(formatting::format_area(country.area)),
            Cell::new(formatting::format_list(&country.continents)),
        ]);
    }

    for column in [0, 4, 5] {
        if let Some(col) = table.column_mut(column) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::license::definitions::Catalog;
use crate::models::Recognition;

/// Render lookup results as a colored table followed by a summary line.
pub fn render(results: &[Recognition], quiet: bool) {
    let total = results.len();
    let recognized = results.iter().filter(|r| r.recognized).count();
    let unrecognized = total - recognized;

    if !quiet {
        println!(
            "\n {} v{}\n",
            "license-recognizer".bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!("{}", results_table(results));
        println!();
    }

    println!(
        "Total: {}  Recognized: {}  Unrecognized: {}",
        total,
        recognized.to_string().green(),
        unrecognized.to_string().yellow(),
    );
}

fn results_table(results: &[Recognition]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Input").add_attribute(Attribute::Bold),
            Cell::new("Lookup").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("URL").add_attribute(Attribute::Bold),
        ]);

    for result in results {
        let (status, color) = if result.recognized {
            ("✓", Color::Green)
        } else {
            ("?", Color::Yellow)
        };

        table.add_row(vec![
            Cell::new(&result.input),
            Cell::new(result.mode.to_string()).set_alignment(CellAlignment::Center),
            Cell::new(format!("{} {}", status, result.license.short_name())).fg(color),
            Cell::new(result.license.name()),
            Cell::new(result.license.reference_url().unwrap_or("-")),
        ]);
    }

    table
}

/// Render every catalog entry with its aliases.
pub fn render_catalog(catalog: &Catalog) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Short name").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Also known as").add_attribute(Attribute::Bold),
            Cell::new("URL").add_attribute(Attribute::Bold),
        ]);

    for license in catalog.all() {
        table.add_row(vec![
            Cell::new(license.short_name()).add_attribute(Attribute::Bold),
            Cell::new(license.name()),
            Cell::new(license.aliases().join("\n")),
            Cell::new(license.reference_url().unwrap_or("-")),
        ]);
    }

    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::recognizer::Recognizer;
    use crate::models::LookupMode;

    #[test]
    fn test_results_table_lists_each_input() {
        let catalog = Catalog::standard().unwrap();
        let recognizer = Recognizer::new(&catalog);
        let results = vec![
            Recognition::new("Expat", LookupMode::Name, recognizer.by_name("Expat")),
            Recognition::new("Zlib", LookupMode::Name, recognizer.by_name("Zlib")),
        ];

        let rendered = results_table(&results).to_string();
        assert!(rendered.contains("Expat"));
        assert!(rendered.contains("MIT"));
        assert!(rendered.contains("Zlib"));
        assert!(rendered.contains("name"));
    }
}

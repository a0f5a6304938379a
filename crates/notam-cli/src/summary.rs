use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::{Value, json};

use notam_dictionary::LoadedDictionary;
use notam_map::Suggestion;
use notam_model::ReverseIndex;
use notam_transform::AMBIGUITY_SEPARATOR;

pub fn print_dictionary(loaded: &LoadedDictionary, ambiguous_only: bool) {
    println!("{}", report_table(loaded));
    let table = if ambiguous_only {
        ambiguous_table(&loaded.mapping.reverse_index())
    } else {
        entries_table(loaded)
    };
    println!("{table}");
}

pub fn print_suggestions(word: &str, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        eprintln!("no close matches for '{word}'");
        return;
    }
    println!("{}", suggestion_table(suggestions));
}

/// Where the dictionary came from and what the builder did with it.
pub fn report_table(loaded: &LoadedDictionary) -> Table {
    let report = &loaded.report;
    let source = loaded
        .path
        .as_ref()
        .map_or_else(|| "<stream>".to_string(), |p| p.display().to_string());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Dictionary"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Source"), Cell::new(source)]);
    table.add_row(vec![
        Cell::new("SHA-256"),
        report
            .source_sha256
            .as_deref()
            .map_or_else(|| dim_cell("-"), Cell::new),
    ]);
    table.add_row(vec![Cell::new("Rows read"), Cell::new(report.rows_read)]);
    table.add_row(vec![Cell::new("Entries"), Cell::new(report.entries)]);
    table.add_row(vec![
        Cell::new("Overwritten"),
        count_cell(report.overwritten, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Skipped"),
        count_cell(report.skipped.len(), Color::Red),
    ]);
    table
}

/// Every phrase with its abbreviation, in dictionary order.
pub fn entries_table(loaded: &LoadedDictionary) -> Table {
    let reverse = loaded.mapping.reverse_index();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Phrase"),
        header_cell("Abbreviation"),
        header_cell("Shared"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &loaded.mapping {
        let shared = reverse
            .get(entry.abbreviation())
            .map_or(1, <[String]>::len);
        let shared_cell = if shared > 1 {
            Cell::new(shared).fg(Color::Yellow)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(entry.phrase()),
            Cell::new(entry.abbreviation()).add_attribute(Attribute::Bold),
            shared_cell,
        ]);
    }
    table
}

/// Abbreviations that decode to more than one phrase.
pub fn ambiguous_table(reverse: &ReverseIndex) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Abbreviation"),
        header_cell("Decodes to"),
    ]);
    apply_table_style(&mut table);
    for (abbreviation, phrases) in reverse.ambiguous() {
        table.add_row(vec![
            Cell::new(abbreviation.to_uppercase()).add_attribute(Attribute::Bold),
            Cell::new(phrases.join(AMBIGUITY_SEPARATOR)),
        ]);
    }
    table
}

pub fn suggestion_table(suggestions: &[Suggestion]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Suggestion"),
        header_cell("Edits"),
        header_cell("Similarity"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for suggestion in suggestions {
        table.add_row(vec![
            Cell::new(&suggestion.term),
            Cell::new(suggestion.distance),
            Cell::new(format!("{:.2}", suggestion.similarity)),
        ]);
    }
    table
}

/// Machine-readable form of `notam dictionary`.
pub fn dictionary_json(loaded: &LoadedDictionary, ambiguous_only: bool) -> Value {
    let reverse = loaded.mapping.reverse_index();
    let entries: Value = if ambiguous_only {
        reverse
            .ambiguous()
            .map(|(abbreviation, phrases)| {
                json!({ "abbreviation": abbreviation.to_uppercase(), "phrases": phrases })
            })
            .collect()
    } else {
        serde_json::to_value(&loaded.mapping).unwrap_or(Value::Null)
    };
    json!({
        "source": loaded.path.as_ref().map(|p| p.display().to_string()),
        "report": loaded.report,
        "entries": entries,
    })
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use projconv_cli::types::{BatchResult, ProjectOutcome, ProjectStatus};

pub fn print_summary(result: &BatchResult) {
    if result.outcomes.is_empty() {
        println!("No projects found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Project"),
        header_cell("Name"),
        header_cell("WPF"),
        header_cell("Kept"),
        header_cell("Status"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for outcome in &result.outcomes {
        table.add_row(vec![
            Cell::new(outcome.path.display()),
            name_cell(outcome),
            wpf_cell(outcome),
            Cell::new(outcome.retained_properties),
            status_cell(&outcome.status),
        ]);
    }
    let failed = result.failed_count();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} projects", result.outcomes.len())),
        dim_cell("-"),
        dim_cell("-"),
        if failed > 0 {
            Cell::new(format!("{failed} failed")).fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            Cell::new("all ok").fg(Color::Green)
        },
    ]);
    println!("{table}");

    if failed > 0 {
        eprintln!("Errors:");
        for outcome in &result.outcomes {
            if let ProjectStatus::Failed(message) = &outcome.status {
                eprintln!("- {}: {message}", outcome.path.display());
            }
        }
    }
}

fn name_cell(outcome: &ProjectOutcome) -> Cell {
    if outcome.project_name.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(&outcome.project_name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn wpf_cell(outcome: &ProjectOutcome) -> Cell {
    if outcome.is_wpf {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn status_cell(status: &ProjectStatus) -> Cell {
    match status {
        ProjectStatus::Converted => Cell::new("converted").fg(Color::Green),
        ProjectStatus::DryRun => Cell::new("dry run").fg(Color::Yellow),
        ProjectStatus::Failed(_) => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

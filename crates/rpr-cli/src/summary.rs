use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rpr_model::DecisionRoute;
use rpr_validate::ValidationReport;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

/// "Not recorded" renders dimmed so it reads differently from zero.
fn count_cell(value: Option<u32>) -> Cell {
    match value {
        Some(count) => Cell::new(count),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

/// Print the route/country matrix the way the edit view lays it out.
pub fn print_matrix(routes: &[DecisionRoute]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Route"),
        header_cell("Country"),
        header_cell("Yes"),
        header_cell("No"),
        header_cell("Yes after comp"),
        header_cell("No after comp"),
        header_cell("Other conditions"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    for column in 2..=7 {
        if let Some(column) = table.column_mut(column) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for route in routes {
        let route_name = if route.name.trim().is_empty() {
            Cell::new("(unnamed)").fg(Color::DarkGrey)
        } else {
            Cell::new(&route.name)
        };
        for (index, country) in route.countries.iter().enumerate() {
            let name_cell = if index == 0 {
                route_name.clone()
            } else {
                Cell::new("")
            };
            let country_cell = match &country.code {
                Some(code) => Cell::new(code),
                None => Cell::new("(none)").fg(Color::DarkGrey),
            };
            let decisions = country.decisions;
            table.add_row(vec![
                name_cell,
                country_cell,
                count_cell(decisions.yes),
                count_cell(decisions.no),
                count_cell(decisions.yes_after_comp),
                count_cell(decisions.no_after_comp),
                count_cell(decisions.no_other_conditions),
                Cell::new(decisions.total()),
            ]);
        }
    }

    let grand_total: u64 = routes.iter().map(DecisionRoute::total).sum();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(grand_total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

/// Print a validation report as a positional error table.
pub fn print_validation(report: &ValidationReport) {
    if report.is_valid() {
        println!("Submission is valid.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Problem")]);
    apply_table_style(&mut table);
    for error in &report.errors {
        table.add_row(vec![
            Cell::new(error.location.to_string()).fg(Color::Red),
            Cell::new(&error.message),
        ]);
    }
    println!("{table}");
    println!(
        "{} problem(s) found; fix them and resubmit.",
        report.error_count()
    );
}

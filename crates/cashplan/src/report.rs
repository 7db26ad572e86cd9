//! Plain-text projection tables.
//!
//! Monthly rows mirror the engine's snapshots one-to-one. Yearly rows sum
//! twelve months of cash flow and show the balances as of each year's last
//! projected month. Rounding happens here, at the display edge, never in
//! the engine.

use cashplan_core::model::{EntityKind, MonthlySnapshot, SimulationResult};
use cashplan_core::month_math::add_months;
use jiff::civil::Date;

pub fn print_monthly(result: &SimulationResult, start: Option<Date>) {
    if !print_header(result) {
        return;
    }

    println!(
        "{:>8}  {:>14}  {:>14}  {:>14}  {:>16}  {:>16}",
        "month", "income", "expense", "net", "assets", "liabilities"
    );
    for snapshot in &result.monthly {
        print_row(&month_label(start, snapshot.month), snapshot);
    }
}

pub fn print_yearly(result: &SimulationResult, start: Option<Date>) {
    if !print_header(result) {
        return;
    }

    println!(
        "{:>8}  {:>14}  {:>14}  {:>14}  {:>16}  {:>16}",
        "year", "income", "expense", "net", "assets", "liabilities"
    );
    for chunk in result.monthly.chunks(12) {
        let income: f64 = chunk.iter().map(MonthlySnapshot::total_income).sum();
        let expense: f64 = chunk.iter().map(MonthlySnapshot::total_expense).sum();
        // Balances are a point-in-time reading at the year's end.
        let Some(last) = chunk.last() else {
            continue;
        };
        let label = match start {
            Some(date) => add_months(date, last.month as i32).year().to_string(),
            None => format!("Y{}", last.month / 12 + 1),
        };
        println!(
            "{label:>8}  {:>14}  {:>14}  {:>14}  {:>16}  {:>16}",
            format_money(income),
            format_money(expense),
            format_money(income - expense),
            format_money(kind_total(last, EntityKind::Asset)),
            format_money(kind_total(last, EntityKind::Liability)),
        );
    }
}

/// Prints the summary block; returns false when there is nothing to show.
fn print_header(result: &SimulationResult) -> bool {
    if !result.has_data {
        println!("Plan has no cash flows and no tracked balances.");
        return false;
    }
    let current = result.current_cash_flow;
    println!(
        "Current monthly cash flow: income {}, expense {}, net {}",
        format_money(current.income),
        format_money(current.expense),
        format_money(current.net)
    );
    println!();
    true
}

fn print_row(label: &str, snapshot: &MonthlySnapshot) {
    println!(
        "{label:>8}  {:>14}  {:>14}  {:>14}  {:>16}  {:>16}",
        format_money(snapshot.total_income()),
        format_money(snapshot.total_expense()),
        format_money(snapshot.total_income() - snapshot.total_expense()),
        format_money(kind_total(snapshot, EntityKind::Asset)),
        format_money(kind_total(snapshot, EntityKind::Liability)),
    );
}

fn kind_total(snapshot: &MonthlySnapshot, kind: EntityKind) -> f64 {
    snapshot
        .balances
        .get(&kind)
        .map(|entries| entries.values().sum())
        .unwrap_or(0.0)
}

fn month_label(start: Option<Date>, month: u32) -> String {
    match start {
        Some(date) => {
            let d = add_months(date, month as i32);
            format!("{:04}-{:02}", d.year(), d.month())
        }
        None => format!("M{month}"),
    }
}

/// Round to whole units and group thousands: 1234567.8 -> "1,234,568".
fn format_money(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use libretto::domain::{Ledger, KIND_EXPENSES, KIND_INCOME};

/// The standard two-entry scenario: a salary and a grocery run.
pub fn scenario_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.append(150_000, "Salary", KIND_INCOME);
    ledger.append(4250, "Groceries", KIND_EXPENSES);
    ledger
}

/// Export a ledger to CSV in memory and split it into lines.
pub fn csv_lines(ledger: &Ledger) -> Vec<String> {
    let mut buffer = Vec::new();
    libretto::Exporter::new(ledger)
        .export_csv(&mut buffer)
        .expect("in-memory export cannot fail");
    String::from_utf8(buffer)
        .expect("export is UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

mod common;

use common::scenario_ledger;
use libretto::domain::{Ledger, KIND_EXPENSES, KIND_INCOME};

#[test]
fn test_standard_scenario() {
    let ledger = scenario_ledger();

    assert_eq!(ledger.total(KIND_INCOME), 150_000);
    assert_eq!(ledger.total(KIND_EXPENSES), 4250);

    let entries = ledger.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, 0);
    assert_eq!(entries[0].category, "Salary");
    assert_eq!(entries[1].id, 1);
    assert_eq!(entries[1].category, "Groceries");
}

#[test]
fn test_ids_match_append_order() {
    let mut ledger = Ledger::new();
    let categories = ["Rent", "Dining", "Books", "Fuel"];
    for category in categories {
        ledger.append(1000, category, KIND_EXPENSES);
    }

    for (position, entry) in ledger.entries().iter().enumerate() {
        assert_eq!(entry.id as usize, position);
        assert_eq!(entry.category, categories[position]);
    }
}

#[test]
fn test_total_on_nonexistent_kind() {
    assert_eq!(Ledger::new().total("nonexistent"), 0);
    assert_eq!(scenario_ledger().total("nonexistent"), 0);
}

#[test]
fn test_timestamps_are_assigned_at_append() {
    let before = chrono::Utc::now();
    let mut ledger = Ledger::new();
    ledger.append(100, "Coffee", KIND_EXPENSES);
    let after = chrono::Utc::now();

    let recorded_at = ledger.entries()[0].recorded_at;
    assert!(recorded_at >= before && recorded_at <= after);
}

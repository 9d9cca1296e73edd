// Roster search and sort behavior over the seed records.

use onboardflow::employees::{EmployeeRoster, SortColumn, SortDirection};

#[test]
fn search_is_case_insensitive_across_fields() {
    let roster = EmployeeRoster::default();

    let hits = roster.search("PRIYA");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Priya Sharma");
    assert_eq!(hits[0].email, "priya.sharma@example.com");
    assert_eq!(hits[0].department, "Human Resources");

    // "resources" only matches through the department field
    let hits = roster.search("resources");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Priya Sharma");
}

#[test]
fn results_are_recomputed_per_query() {
    let roster = EmployeeRoster::default();
    assert_eq!(roster.search("engineering").len(), 2);
    assert_eq!(roster.search("finance").len(), 1);
    assert_eq!(roster.search("").len(), roster.records().len());
}

#[test]
fn same_column_twice_toggles_ascending_to_descending() {
    let mut roster = EmployeeRoster::default();

    roster.toggle_sort(SortColumn::Department);
    assert_eq!(roster.sort_direction(), SortDirection::Ascending);
    let first = roster.search("")[0].department.clone();
    assert_eq!(first, "Engineering");

    roster.toggle_sort(SortColumn::Department);
    assert_eq!(roster.sort_direction(), SortDirection::Descending);
    let first = roster.search("")[0].department.clone();
    assert_eq!(first, "Marketing");
}

#[test]
fn sort_applies_to_filtered_results() {
    let mut roster = EmployeeRoster::default();
    roster.toggle_sort(SortColumn::Name);

    let names: Vec<&str> = roster
        .search("engineering")
        .iter()
        .map(|record| record.name.as_str())
        .collect();
    assert_eq!(names, vec!["Rajesh Kumar", "Vikram Reddy"]);
}

#[test]
fn date_column_sorts_chronologically() {
    let mut roster = EmployeeRoster::default();
    roster.toggle_sort(SortColumn::SubmissionDate);

    let dates: Vec<String> = roster
        .search("")
        .iter()
        .map(|record| record.submission_date.to_string())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

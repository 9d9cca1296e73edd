use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{seed_records, EmployeeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortColumn {
    Name,
    Email,
    Department,
    DocumentStatus,
    SubmissionDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Read-only roster of submitted employee records with substring search and
/// column sorting. The view is recomputed on every call, never cached.
#[derive(Debug, Clone)]
pub struct EmployeeRoster {
    records: Vec<EmployeeRecord>,
    sort_column: SortColumn,
    sort_direction: SortDirection,
}

impl Default for EmployeeRoster {
    fn default() -> Self {
        Self::new(seed_records())
    }
}

impl EmployeeRoster {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records,
            sort_column: SortColumn::SubmissionDate,
            sort_direction: SortDirection::Descending,
        }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Select a sort column. Clicking the column already sorted ascending
    /// flips it to descending; any other click sorts ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort_direction =
            if self.sort_column == column && self.sort_direction == SortDirection::Ascending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
        self.sort_column = column;
        debug!(column = ?self.sort_column, direction = ?self.sort_direction, "roster sort changed");
    }

    /// Case-insensitive substring match across name, email and department,
    /// sorted by the current column and direction.
    pub fn search(&self, query: &str) -> Vec<&EmployeeRecord> {
        let needle = query.to_lowercase();
        let mut matches: Vec<&EmployeeRecord> = self
            .records
            .iter()
            .filter(|record| {
                record.name.to_lowercase().contains(&needle)
                    || record.email.to_lowercase().contains(&needle)
                    || record.department.to_lowercase().contains(&needle)
            })
            .collect();

        matches.sort_by(|a, b| {
            let ordering = compare(a, b, self.sort_column);
            match self.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        matches
    }
}

fn compare(a: &EmployeeRecord, b: &EmployeeRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => compare_text(&a.name, &b.name),
        SortColumn::Email => compare_text(&a.email, &b.email),
        SortColumn::Department => compare_text(&a.department, &b.department),
        SortColumn::DocumentStatus => a.document_status.as_str().cmp(b.document_status.as_str()),
        SortColumn::SubmissionDate => a.submission_date.cmp(&b.submission_date),
    }
}

// Locale-style ordering approximated as case-insensitive lexicographic.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let roster = EmployeeRoster::default();

        for query in ["priya", "PRIYA", "pRiYa"] {
            let hits = roster.search(query);
            assert_eq!(hits.len(), 1, "query {query:?}");
            assert_eq!(hits[0].name, "Priya Sharma");
        }

        // department match
        let hits = roster.search("engineering");
        assert_eq!(hits.len(), 2);

        // email match
        let hits = roster.search("amit.patel@");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Amit Patel");
    }

    #[test]
    fn empty_query_returns_everyone() {
        let roster = EmployeeRoster::default();
        assert_eq!(roster.search("").len(), 5);
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let roster = EmployeeRoster::default();
        assert!(roster.search("nonexistent").is_empty());
    }

    #[test]
    fn default_order_is_newest_submission_first() {
        let roster = EmployeeRoster::default();
        let names: Vec<&str> = roster.search("").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Vikram Reddy",
                "Priya Sharma",
                "Rajesh Kumar",
                "Amit Patel",
                "Neha Singh"
            ]
        );
    }

    #[test]
    fn repeated_sort_on_same_column_toggles_direction() {
        let mut roster = EmployeeRoster::default();

        roster.toggle_sort(SortColumn::Name);
        assert_eq!(roster.sort_direction(), SortDirection::Ascending);
        let names: Vec<&str> = roster.search("").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names[0], "Amit Patel");

        roster.toggle_sort(SortColumn::Name);
        assert_eq!(roster.sort_direction(), SortDirection::Descending);
        let names: Vec<&str> = roster.search("").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names[0], "Vikram Reddy");
    }

    #[test]
    fn switching_column_resets_to_ascending() {
        let mut roster = EmployeeRoster::default();
        roster.toggle_sort(SortColumn::Name);
        roster.toggle_sort(SortColumn::Name);
        assert_eq!(roster.sort_direction(), SortDirection::Descending);

        roster.toggle_sort(SortColumn::Department);
        assert_eq!(roster.sort_column(), SortColumn::Department);
        assert_eq!(roster.sort_direction(), SortDirection::Ascending);
    }

    #[test]
    fn status_column_sorts_by_label() {
        let mut roster = EmployeeRoster::default();
        roster.toggle_sort(SortColumn::DocumentStatus);
        let statuses: Vec<&str> = roster
            .search("")
            .iter()
            .map(|r| r.document_status.as_str())
            .collect();
        assert_eq!(
            statuses,
            vec!["approved", "approved", "pending", "pending", "rejected"]
        );
    }
}

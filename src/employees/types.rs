use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where an employee's submitted documents stand overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Approved,
    Rejected,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Approved => "approved",
            RecordStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the submissions roster. Read-only display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub document_status: RecordStatus,
    pub submission_date: NaiveDate,
}

fn record(
    id: &str,
    name: &str,
    email: &str,
    department: &str,
    document_status: RecordStatus,
    submission_date: (i32, u32, u32),
) -> EmployeeRecord {
    let (year, month, day) = submission_date;
    EmployeeRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        document_status,
        submission_date: NaiveDate::from_ymd_opt(year, month, day)
            .expect("seed dates are valid"),
    }
}

/// The mock submissions the roster is seeded with.
pub fn seed_records() -> Vec<EmployeeRecord> {
    vec![
        record(
            "1",
            "Rajesh Kumar",
            "rajesh.kumar@example.com",
            "Engineering",
            RecordStatus::Approved,
            (2023, 6, 15),
        ),
        record(
            "2",
            "Priya Sharma",
            "priya.sharma@example.com",
            "Human Resources",
            RecordStatus::Pending,
            (2023, 6, 18),
        ),
        record(
            "3",
            "Amit Patel",
            "amit.patel@example.com",
            "Finance",
            RecordStatus::Rejected,
            (2023, 6, 10),
        ),
        record(
            "4",
            "Neha Singh",
            "neha.singh@example.com",
            "Marketing",
            RecordStatus::Approved,
            (2023, 6, 5),
        ),
        record(
            "5",
            "Vikram Reddy",
            "vikram.reddy@example.com",
            "Engineering",
            RecordStatus::Pending,
            (2023, 6, 20),
        ),
    ]
}

// Employee submissions roster - read-only search and sort over seed data.

pub mod roster;
pub mod types;

pub use roster::{EmployeeRoster, SortColumn, SortDirection};
pub use types::{seed_records, EmployeeRecord, RecordStatus};

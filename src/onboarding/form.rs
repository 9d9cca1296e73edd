use serde::{Deserialize, Serialize};

/// Basic details captured on the first wizard step. All fields are free
/// text; submission is gated on completeness only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub department: String,
    pub designation: String,
    pub joining_date: String,
}

impl EmployeeForm {
    fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("gender", &self.gender),
            ("department", &self.department),
            ("designation", &self.designation),
            ("joining_date", &self.joining_date),
        ]
    }

    /// Every field filled in; whitespace-only values count as blank.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|(_, value)| !value.trim().is_empty())
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeForm {
        EmployeeForm {
            first_name: "Priya".to_string(),
            last_name: "Sharma".to_string(),
            email: "priya.sharma@example.com".to_string(),
            phone: "+91 9876543210".to_string(),
            gender: "female".to_string(),
            department: "hr".to_string(),
            designation: "HR Assistant".to_string(),
            joining_date: "2023-06-18".to_string(),
        }
    }

    #[test]
    fn complete_form_passes_the_gate() {
        assert!(filled().is_complete());
        assert!(filled().missing_fields().is_empty());
    }

    #[test]
    fn any_blank_field_blocks_submission() {
        let mut form = filled();
        form.phone = "   ".to_string();
        assert!(!form.is_complete());
        assert_eq!(form.missing_fields(), vec!["phone"]);
    }

    #[test]
    fn empty_form_reports_every_field() {
        let form = EmployeeForm::default();
        assert_eq!(form.missing_fields().len(), 8);
    }
}

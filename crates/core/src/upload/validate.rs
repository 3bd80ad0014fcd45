//! Upload form validation.
//!
//! All rules run and all issues are collected before anything is rejected,
//! so the client can report per-field errors in one pass. A form that fails
//! validation never partially applies.

use super::types::{
    FieldIssue, ResourceKind, UploadForm, ValidatedUpload, ACCEPTED_FILE_TYPES, MAX_FILE_SIZE,
};

/// Teaching weeks run 1 through 14.
const MAX_WEEK_NUMBER: i32 = 14;

impl UploadForm {
    /// Validate the raw form, parsing numeric fields exactly once.
    pub fn validate(self) -> Result<ValidatedUpload, Vec<FieldIssue>> {
        let mut issues = Vec::new();

        let unit_name = match non_empty(&self.unit_name) {
            Some(unit) => Some(unit.to_string()),
            None => {
                issues.push(FieldIssue::new("unitName", "Please select a unit."));
                None
            }
        };

        let kind = match non_empty(&self.resource_type) {
            Some(value) => match ResourceKind::parse(value) {
                Some(kind) => Some(kind),
                None => {
                    issues.push(FieldIssue::new(
                        "resourceType",
                        "Please select a resource type.",
                    ));
                    None
                }
            },
            None => {
                issues.push(FieldIssue::new(
                    "resourceType",
                    "Please select a resource type.",
                ));
                None
            }
        };

        if self.files.is_empty() {
            issues.push(FieldIssue::new("files", "Please upload at least one file."));
        }
        if self.files.iter().any(|f| f.size() > MAX_FILE_SIZE) {
            issues.push(FieldIssue::new(
                "files",
                "Each file must be less than 10MB.",
            ));
        }
        if self
            .files
            .iter()
            .any(|f| !ACCEPTED_FILE_TYPES.contains(&f.content_type.as_str()))
        {
            issues.push(FieldIssue::new(
                "files",
                "Only PDF and Office documents are allowed.",
            ));
        }

        let mut year_completed = None;
        let mut week_number = None;

        match kind {
            Some(ResourceKind::PastPaper) => {
                let year = non_empty(&self.year_completed);
                let candidates = non_empty(&self.year_of_candidates);
                let semester = non_empty(&self.semester);

                if year.is_none() || candidates.is_none() || semester.is_none() {
                    issues.push(FieldIssue::new(
                        "semester",
                        "Semester, year completed, and year of candidates are required for past papers.",
                    ));
                }
                if let Some(year) = year {
                    match year.parse::<i32>() {
                        Ok(parsed) => year_completed = Some(parsed),
                        Err(_) => issues.push(FieldIssue::new(
                            "yearCompleted",
                            "Year completed must be a number.",
                        )),
                    }
                }
                if let Some(candidates) = candidates {
                    if candidates.len() > 4 {
                        issues.push(FieldIssue::new(
                            "yearOfCandidates",
                            "Year of candidates must be at most 4 characters.",
                        ));
                    }
                }
            }
            Some(ResourceKind::LessonNotes) => match non_empty(&self.week_number) {
                Some(week) => match week.parse::<i32>() {
                    Ok(parsed) if (1..=MAX_WEEK_NUMBER).contains(&parsed) => {
                        week_number = Some(parsed)
                    }
                    _ => issues.push(FieldIssue::new(
                        "weekNumber",
                        "Week number must be between 1 and 14.",
                    )),
                },
                None => issues.push(FieldIssue::new(
                    "weekNumber",
                    "Week number is required for lesson notes",
                )),
            },
            None => {}
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(ValidatedUpload {
            // Both unwraps guarded by the issue checks above.
            unit_name: unit_name.unwrap(),
            kind: kind.unwrap(),
            year_completed,
            year_of_candidates: non_empty(&self.year_of_candidates).map(String::from),
            semester: non_empty(&self.semester).map(String::from),
            week_number,
            files: self.files,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

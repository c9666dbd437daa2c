use serde::Serialize;

use crate::error::FormError;
use crate::hire_us::fields::{FieldId, ProjectType};

/// A file picked in the attachment field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileHandle {
    pub name: String,
    pub size: u64,
    #[serde(skip)]
    pub content: Option<web_sys::File>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            content: None,
        }
    }

    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            content: Some(file),
        }
    }
}

/// Everything the visitor has typed into the intake form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub project_name: String,
    pub project_type: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    pub additional_notes: String,
    pub email: String,
    pub phone: String,
    pub files: Vec<FileHandle>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            project_type: ProjectType::default().as_str().to_string(),
            description: String::new(),
            budget: String::new(),
            deadline: String::new(),
            additional_notes: String::new(),
            email: String::new(),
            phone: String::new(),
            files: Vec::new(),
        }
    }
}

impl FormState {
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::ProjectName => &self.project_name,
            FieldId::ProjectType => &self.project_type,
            FieldId::Description => &self.description,
            FieldId::Budget => &self.budget,
            FieldId::Deadline => &self.deadline,
            FieldId::AdditionalNotes => &self.additional_notes,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
        }
    }

    fn slot(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::ProjectName => &mut self.project_name,
            FieldId::ProjectType => &mut self.project_type,
            FieldId::Description => &mut self.description,
            FieldId::Budget => &mut self.budget,
            FieldId::Deadline => &mut self.deadline,
            FieldId::AdditionalNotes => &mut self.additional_notes,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
        }
    }

    /// Files bigger than `limit` bytes, in selection order.
    pub fn oversized_files(&self, limit: u64) -> Vec<&FileHandle> {
        self.files.iter().filter(|file| file.size > limit).collect()
    }
}

/// Owns the single [`FormState`] of a form session. Callers only ever get
/// copies back, all writes go through `set_field`/`set_value`/`set_files`.
#[derive(Debug, Default)]
pub struct FormStore {
    state: FormState,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one text field addressed by its control name.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<FieldId, FormError> {
        let field = FieldId::from_name(name)?;
        self.set_value(field, value);
        Ok(field)
    }

    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        *self.state.slot(field) = value.into();
    }

    pub fn set_files(&mut self, files: Vec<FileHandle>) {
        self.state.files = files;
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn snapshot(&self) -> FormState {
        self.state.clone()
    }

    pub fn reset(&mut self) {
        self.state = FormState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty_with_default_project_type() {
        let store = FormStore::new();
        let state = store.snapshot();
        assert_eq!(state.project_type, "Website Development");
        assert!(state.project_name.is_empty());
        assert!(state.phone.is_empty());
        assert!(state.files.is_empty());
    }

    #[test]
    fn test_set_field_touches_only_that_field() {
        let mut store = FormStore::new();
        store.set_value(FieldId::Email, "a@b.com");
        let before = store.snapshot();

        assert_eq!(store.set_field("budget", "1000"), Ok(FieldId::Budget));

        let after = store.snapshot();
        assert_eq!(after.budget, "1000");
        assert_eq!(after.email, "a@b.com");
        assert_eq!(FormState { budget: before.budget.clone(), ..after.clone() }, before);
    }

    #[test]
    fn test_set_field_rejects_unknown_names() {
        let mut store = FormStore::new();
        let before = store.snapshot();

        assert_eq!(
            store.set_field("nickname", "x"),
            Err(FormError::UnknownField("nickname".to_string()))
        );
        assert!(store.set_field("files", "x").is_err());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_set_files_replaces_whole_list() {
        let mut store = FormStore::new();
        store.set_files(vec![FileHandle::new("brief.pdf", 10), FileHandle::new("logo.png", 20)]);
        store.set_files(vec![FileHandle::new("mockup.fig", 30)]);

        let files = store.snapshot().files;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "mockup.fig");
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let mut store = FormStore::new();
        let mut copy = store.snapshot();
        copy.project_name = "changed outside".to_string();
        assert_eq!(store.state().project_name, "");

        store.set_value(FieldId::ProjectName, "Landing page");
        assert_eq!(copy.project_name, "changed outside");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = FormStore::new();
        store.set_value(FieldId::ProjectType, "");
        store.set_value(FieldId::Phone, "123");
        store.set_files(vec![FileHandle::new("a.txt", 1)]);
        store.reset();
        assert_eq!(store.snapshot(), FormState::default());
    }

    #[test]
    fn test_oversized_files() {
        let mut state = FormState::default();
        state.files = vec![
            FileHandle::new("small.png", 1_000),
            FileHandle::new("video.mov", 30_000_000),
            FileHandle::new("exact.zip", 25),
        ];
        let big: Vec<&str> = state.oversized_files(25).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(big, vec!["small.png", "video.mov"]);
    }

    #[test]
    fn test_serialized_record_uses_control_names() {
        let mut state = FormState::default();
        state.project_name = "Shop".to_string();
        state.files = vec![FileHandle::new("brief.pdf", 42)];
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["projectName"], "Shop");
        assert_eq!(json["projectType"], "Website Development");
        assert_eq!(json["additionalNotes"], "");
        assert_eq!(json["files"][0]["name"], "brief.pdf");
        assert_eq!(json["files"][0]["size"], 42);
        assert!(json["files"][0].get("content").is_none());
    }
}

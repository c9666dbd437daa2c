use crate::error::FormError;

/// Name of the attachment input. It is the only field that is not text and
/// never takes part in validation.
pub const FILES_FIELD: &str = "files";

/// The required text fields of the intake form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    ProjectName,
    ProjectType,
    Description,
    Budget,
    Deadline,
    AdditionalNotes,
    Email,
    Phone,
}

impl FieldId {
    /// Every required field. Validation reports missing fields in this order
    /// and the error banner lists them the same way.
    pub const REQUIRED: [FieldId; 8] = [
        FieldId::ProjectName,
        FieldId::ProjectType,
        FieldId::Description,
        FieldId::Budget,
        FieldId::Deadline,
        FieldId::AdditionalNotes,
        FieldId::Email,
        FieldId::Phone,
    ];

    /// The `name` attribute used by the form controls.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::ProjectName => "projectName",
            FieldId::ProjectType => "projectType",
            FieldId::Description => "description",
            FieldId::Budget => "budget",
            FieldId::Deadline => "deadline",
            FieldId::AdditionalNotes => "additionalNotes",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::ProjectName => "Project Name",
            FieldId::ProjectType => "Project Type",
            FieldId::Description => "Project Description",
            FieldId::Budget => "Estimated Budget",
            FieldId::Deadline => "Deadline",
            FieldId::AdditionalNotes => "Additional Notes",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone Number",
        }
    }

    pub fn from_name(name: &str) -> Result<FieldId, FormError> {
        FieldId::REQUIRED
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

/// Label for a raw field name, or the name itself when it is not a known field.
pub fn label_for(name: &str) -> String {
    match FieldId::from_name(name) {
        Ok(field) => field.label().to_string(),
        Err(_) => name.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectType {
    #[default]
    WebsiteDevelopment,
    MobileApp,
    UiUxDesign,
    MarketingSeo,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::WebsiteDevelopment,
        ProjectType::MobileApp,
        ProjectType::UiUxDesign,
        ProjectType::MarketingSeo,
        ProjectType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::WebsiteDevelopment => "Website Development",
            ProjectType::MobileApp => "Mobile App",
            ProjectType::UiUxDesign => "UI/UX Design",
            ProjectType::MarketingSeo => "Marketing / SEO",
            ProjectType::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_required_field() {
        for field in FieldId::REQUIRED {
            assert_eq!(FieldId::from_name(field.name()), Ok(field));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown_and_files() {
        assert_eq!(
            FieldId::from_name("nickname"),
            Err(FormError::UnknownField("nickname".to_string()))
        );
        assert!(FieldId::from_name(FILES_FIELD).is_err());
        // Names are case sensitive, the DOM sends them verbatim.
        assert!(FieldId::from_name("ProjectName").is_err());
    }

    #[test]
    fn test_label_for_falls_back_to_raw_name() {
        assert_eq!(label_for("projectName"), "Project Name");
        assert_eq!(label_for("phone"), "Phone Number");
        assert_eq!(label_for("mystery"), "mystery");
    }

    #[test]
    fn test_project_type_default_is_first_option() {
        assert_eq!(ProjectType::default(), ProjectType::ALL[0]);
        assert_eq!(ProjectType::default().as_str(), "Website Development");
    }
}

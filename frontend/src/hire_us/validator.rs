use crate::hire_us::fields::FieldId;
use crate::hire_us::form_state::FormState;

/// Required fields found blank, in [`FieldId::REQUIRED`] order.
pub type ValidationResult = Vec<FieldId>;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate(state: &FormState) -> ValidationResult {
    FieldId::REQUIRED
        .iter()
        .copied()
        .filter(|field| is_blank(state.value(*field)))
        .collect()
}

/// The part of an earlier missing-field report that is still blank.
pub fn still_missing(state: &FormState, reported: &[FieldId]) -> ValidationResult {
    reported
        .iter()
        .copied()
        .filter(|field| is_blank(state.value(*field)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hire_us::form_state::FileHandle;

    fn filled() -> FormState {
        FormState {
            project_name: "Bakery site".to_string(),
            project_type: "Website Development".to_string(),
            description: "Five pages and a menu".to_string(),
            budget: "1000".to_string(),
            deadline: "2025-12-31".to_string(),
            additional_notes: "Dark theme".to_string(),
            email: "owner@bakery.test".to_string(),
            phone: "+1 234 567 890".to_string(),
            files: Vec::new(),
        }
    }

    #[test]
    fn test_filled_form_has_nothing_missing() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn test_empty_form_misses_everything_but_project_type() {
        let missing = validate(&FormState::default());
        assert_eq!(
            missing,
            vec![
                FieldId::ProjectName,
                FieldId::Description,
                FieldId::Budget,
                FieldId::Deadline,
                FieldId::AdditionalNotes,
                FieldId::Email,
                FieldId::Phone,
            ]
        );
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let mut state = filled();
        for field in FieldId::REQUIRED {
            match field {
                FieldId::ProjectName => state.project_name = "   ".to_string(),
                FieldId::ProjectType => state.project_type = "\t".to_string(),
                FieldId::Description => state.description = " \n ".to_string(),
                FieldId::Budget => state.budget = " ".to_string(),
                FieldId::Deadline => state.deadline = "  ".to_string(),
                FieldId::AdditionalNotes => state.additional_notes = "   ".to_string(),
                FieldId::Email => state.email = "   ".to_string(),
                FieldId::Phone => state.phone = "   ".to_string(),
            }
        }
        assert_eq!(validate(&state), FieldId::REQUIRED.to_vec());
    }

    #[test]
    fn test_cleared_project_type_is_reported() {
        let mut state = filled();
        state.project_type.clear();
        assert_eq!(validate(&state), vec![FieldId::ProjectType]);
    }

    #[test]
    fn test_order_follows_registry_and_ignores_files() {
        let mut state = filled();
        state.phone.clear();
        state.project_name.clear();
        state.deadline = "  ".to_string();
        state.files = vec![FileHandle::new("", 0)];
        assert_eq!(
            validate(&state),
            vec![FieldId::ProjectName, FieldId::Deadline, FieldId::Phone]
        );
    }

    #[test]
    fn test_surrounding_whitespace_does_not_blank_a_value() {
        let mut state = filled();
        state.budget = "  500 ".to_string();
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut state = filled();
        state.email.clear();
        let first = validate(&state);
        let second = validate(&state);
        assert_eq!(first, second);
        assert_eq!(first, vec![FieldId::Email]);
    }

    #[test]
    fn test_still_missing_keeps_reported_order() {
        let mut state = filled();
        state.email.clear();
        let reported = vec![FieldId::Phone, FieldId::Email, FieldId::Budget];
        assert_eq!(still_missing(&state, &reported), vec![FieldId::Email]);

        state.budget.clear();
        // Budget is blank now but was never reported, so it is not added.
        assert_eq!(still_missing(&state, &[FieldId::Email]), vec![FieldId::Email]);
        assert_eq!(
            still_missing(&state, &reported),
            vec![FieldId::Email, FieldId::Budget]
        );
    }
}

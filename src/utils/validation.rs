use crate::utils::error::{CompareError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| CompareError::MissingArgumentError {
            field: field_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_field() {
        let present = Some("abc".to_string());
        let missing: Option<String> = None;

        assert_eq!(
            validate_required_field("string1", &present).unwrap(),
            "abc"
        );
        assert!(validate_required_field("string1", &missing).is_err());
    }

    #[test]
    fn test_missing_field_error_names_the_field() {
        let missing: Option<String> = None;
        let err = validate_required_field("string2", &missing).unwrap_err();

        match err {
            CompareError::MissingArgumentError { field } => assert_eq!(field, "string2"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

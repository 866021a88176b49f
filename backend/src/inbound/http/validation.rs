//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes an `invalid_request` error whose details carry the
//! offending `field` and a machine-readable `code`.

use serde_json::json;

use crate::domain::{ContactId, EmailAddress, Error, PersonName};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyName,
    InvalidEmail,
    InvalidContactId,
    ImmutableField,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyName => "empty_name",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::InvalidContactId => "invalid_contact_id",
            ErrorCode::ImmutableField => "immutable_field",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const ID: FieldName = FieldName::new("id");
pub(crate) const FIRST_NAME: FieldName = FieldName::new("firstName");
pub(crate) const LAST_NAME: FieldName = FieldName::new("lastName");
pub(crate) const EMAIL: FieldName = FieldName::new("email");

fn field_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_value_error(field: FieldName, code: ErrorCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn immutable_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::ImmutableField,
        format!("{name} cannot be changed"),
    )
}

pub(crate) fn invalid_body_error(reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("request body is not valid JSON: {reason}"))
        .with_details(json!({ "code": ErrorCode::InvalidBody.as_str() }))
}

pub(crate) fn parse_name(value: String, field: FieldName) -> Result<PersonName, Error> {
    PersonName::new(value).map_err(|_| {
        let name = field.as_str();
        field_error(field, ErrorCode::EmptyName, format!("{name} must not be empty"))
    })
}

pub(crate) fn parse_optional_name(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<PersonName>, Error> {
    value.map(|raw| parse_name(raw, field)).transpose()
}

pub(crate) fn parse_email(value: String, field: FieldName) -> Result<EmailAddress, Error> {
    EmailAddress::new(value.as_str()).map_err(|_| {
        let name = field.as_str();
        field_value_error(
            field,
            ErrorCode::InvalidEmail,
            format!("{name} must be a valid email address"),
            &value,
        )
    })
}

pub(crate) fn parse_optional_email(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<EmailAddress>, Error> {
    value.map(|raw| parse_email(raw, field)).transpose()
}

/// Parse a path segment into a [`ContactId`].
pub(crate) fn parse_contact_id(value: &str) -> Result<ContactId, Error> {
    value
        .parse::<u32>()
        .ok()
        .and_then(|raw| ContactId::new(raw).ok())
        .ok_or_else(|| {
            field_value_error(
                ID,
                ErrorCode::InvalidContactId,
                "id must be a positive integer".to_owned(),
                value,
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    fn detail<'a>(err: &'a Error, key: &str) -> Option<&'a Value> {
        err.details().and_then(|details| details.get(key))
    }

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    fn parse_contact_id_accepts_positive_integers(#[case] raw: &str, #[case] expected: u32) {
        let id = parse_contact_id(raw).expect("valid id");
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    fn parse_contact_id_rejects_other_values(#[case] raw: &str) {
        let err = parse_contact_id(raw).expect_err("invalid id");
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(
            detail(&err, "code").and_then(Value::as_str),
            Some("invalid_contact_id")
        );
        assert_eq!(detail(&err, "value").and_then(Value::as_str), Some(raw));
    }

    #[rstest]
    fn missing_field_error_names_the_field() {
        let err = missing_field_error(EMAIL);
        assert_eq!(err.message(), "missing required field: email");
        assert_eq!(detail(&err, "field").and_then(Value::as_str), Some("email"));
        assert_eq!(
            detail(&err, "code").and_then(Value::as_str),
            Some("missing_field")
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn parse_name_rejects_blank(#[case] raw: &str) {
        let err = parse_name(raw.to_owned(), FIRST_NAME).expect_err("blank name");
        assert_eq!(
            detail(&err, "field").and_then(Value::as_str),
            Some("firstName")
        );
        assert_eq!(detail(&err, "code").and_then(Value::as_str), Some("empty_name"));
    }

    #[rstest]
    fn parse_optional_email_passes_absent_values_through() {
        assert_eq!(parse_optional_email(None, EMAIL).expect("absent"), None);
        let err = parse_optional_email(Some("nope".to_owned()), EMAIL).expect_err("bad email");
        assert_eq!(
            detail(&err, "code").and_then(Value::as_str),
            Some("invalid_email")
        );
    }
}

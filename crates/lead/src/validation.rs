use std::sync::LazyLock;

use regex::Regex;

use crate::{FormSchema, FormValues, LeadError, LeadSubmission, ServiceOption};

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone number pattern"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Exactly ten ASCII digits, nothing else.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_NUMBER.is_match(value)
}

/// Empty (the field is optional) or a minimal `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    value.is_empty() || EMAIL.is_match(value)
}

/// Checks `values` against `schema` and freezes them into a submission.
///
/// Rules run in order and the first failure wins: required fields, service
/// membership, phone number, email.
pub fn validate<S: ServiceOption>(
    schema: &FormSchema,
    values: &FormValues,
) -> Result<LeadSubmission<S>, LeadError> {
    if let Some(field) = schema
        .required()
        .iter()
        .find(|field| values.get(**field).trim().is_empty())
    {
        return Err(LeadError::Required(*field));
    }

    let service = values
        .service
        .parse::<S>()
        .map_err(|_| LeadError::InvalidService(values.service.to_owned()))?;

    if !is_valid_phone(&values.phone) {
        return Err(LeadError::InvalidPhone);
    }

    if !is_valid_email(&values.email) {
        return Err(LeadError::InvalidEmail);
    }

    Ok(LeadSubmission {
        name: values.name.to_owned(),
        phone: values.phone.to_owned(),
        email: optional(&values.email),
        service,
        message: optional(&values.message),
    })
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

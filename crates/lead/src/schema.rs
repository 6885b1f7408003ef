use std::collections::{BTreeMap, HashMap};

use moskill_delivery::DeliveryRequest;
use strum::{AsRefStr, Display, VariantArray};

use crate::{Field, FormValues, LeadSubmission, ServiceOption};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum FormKind {
    Contact,
    Quote,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeText {
    pub title: &'static str,
    pub description: &'static str,
}

/// Input name each field is bound to in the rendered form.
///
/// The provider template reads the same names as its variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputNames {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub service: &'static str,
    pub message: &'static str,
}

impl InputNames {
    pub fn get(&self, field: Field) -> &'static str {
        match field {
            Field::Name => self.name,
            Field::Phone => self.phone,
            Field::Email => self.email,
            Field::Service => self.service,
            Field::Message => self.message,
        }
    }
}

/// Everything that differs between the lead forms of the site.
#[derive(Clone, Debug)]
pub struct FormSchema {
    pub kind: FormKind,
    pub template_id: String,
    pub inputs: InputNames,
    required: Vec<Field>,
    pub success: NoticeText,
    pub failure: NoticeText,
    pub closes_on_success: bool,
}

impl FormSchema {
    pub fn contact(template_id: impl Into<String>) -> Self {
        Self {
            kind: FormKind::Contact,
            template_id: template_id.into(),
            inputs: InputNames {
                name: "name",
                phone: "phone",
                email: "email",
                service: "service",
                message: "message",
            },
            required: vec![
                Field::Name,
                Field::Phone,
                Field::Email,
                Field::Service,
                Field::Message,
            ],
            success: NoticeText {
                title: "Message sent successfully!",
                description: "We'll get back to you as soon as possible.",
            },
            failure: NoticeText {
                title: "Failed to send message",
                description: "Please try again or contact us directly.",
            },
            closes_on_success: false,
        }
    }

    pub fn quote(template_id: impl Into<String>) -> Self {
        Self {
            kind: FormKind::Quote,
            template_id: template_id.into(),
            inputs: InputNames {
                name: "user_name",
                phone: "phone_number",
                email: "user_email",
                service: "service",
                message: "message",
            },
            required: vec![Field::Name, Field::Phone, Field::Service],
            success: NoticeText {
                title: "Quote request submitted!",
                description: "We'll get back to you as soon as possible.",
            },
            failure: NoticeText {
                title: "Error",
                description: "There was an error submitting your request. Please try again.",
            },
            closes_on_success: true,
        }
    }

    /// Required fields, in field order.
    pub fn required(&self) -> &[Field] {
        &self.required
    }

    pub fn is_required(&self, field: Field) -> bool {
        self.required.contains(&field)
    }

    pub fn input(&self, field: Field) -> &'static str {
        self.inputs.get(field)
    }

    /// Reads a posted body keyed by input name. Missing inputs are empty.
    pub fn values_from_inputs(&self, inputs: &HashMap<String, String>) -> FormValues {
        Field::VARIANTS
            .iter()
            .fold(FormValues::default(), |values, field| {
                match inputs.get(self.input(*field)) {
                    Some(value) => values.with(*field, value.as_str()),
                    None => values,
                }
            })
    }

    /// Binds a frozen submission to the input names of this form.
    pub fn request<S: ServiceOption>(&self, submission: &LeadSubmission<S>) -> DeliveryRequest {
        let params = Field::VARIANTS
            .iter()
            .map(|field| {
                let value = match field {
                    Field::Name => submission.name.to_owned(),
                    Field::Phone => submission.phone.to_owned(),
                    Field::Email => submission.email.clone().unwrap_or_default(),
                    Field::Service => submission.service.as_ref().to_owned(),
                    Field::Message => submission.message.clone().unwrap_or_default(),
                };

                (self.input(*field).to_owned(), value)
            })
            .collect::<BTreeMap<_, _>>();

        DeliveryRequest {
            template_id: self.template_id.to_owned(),
            params,
        }
    }
}

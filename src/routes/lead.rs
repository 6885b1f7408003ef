use moskill_lead::{Field, FormKind, LeadForm, Notice, ServiceChoice, ServiceOption};

pub struct InputView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

/// Render model of a lead form, shared by the contact page and the quote popup
pub struct FormView {
    pub action: String,
    pub name: InputView,
    pub phone: InputView,
    pub email: InputView,
    pub service: InputView,
    pub message: InputView,
    pub services: Vec<ServiceChoice>,
    pub notice: Option<Notice>,
    pub submit_label: &'static str,
    pub pending_label: &'static str,
}

impl FormView {
    pub fn new<S: ServiceOption>(form: &LeadForm<S>, notice: Option<Notice>) -> Self {
        let input = |field: Field| InputView {
            name: form.schema().input(field),
            label: field.label(),
            value: form.value(field).to_owned(),
            required: form.schema().is_required(field),
        };

        let (submit_label, pending_label) = match form.schema().kind {
            FormKind::Contact => ("Send Message", "Sending..."),
            FormKind::Quote => ("Submit", "Submitting..."),
        };

        Self {
            action: format!("/{}", form.schema().kind),
            name: input(Field::Name),
            phone: input(Field::Phone),
            email: input(Field::Email),
            service: input(Field::Service),
            message: input(Field::Message),
            services: S::choices(),
            notice,
            submit_label,
            pending_label,
        }
    }
}

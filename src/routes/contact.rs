use std::{collections::HashMap, str::FromStr};

use axum::{
    extract::{Form, Query, State},
    response::IntoResponse,
};
use moskill_lead::{ContactService, Field, LeadForm, Notice};
use serde::Deserialize;

use crate::{
    routes::{AppState, lead::FormView},
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub form: FormView,
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: FormView,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub service: Option<String>,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let mut form: LeadForm<ContactService> = LeadForm::new(app.contact.clone());

    // Product pages link here with their service preselected
    if let Some(service) = query
        .service
        .filter(|service| ContactService::from_str(service).is_ok())
    {
        form.set(Field::Service, service);
    }

    template.render(ContactTemplate {
        layout: template.layout(),
        form: FormView::new(&form, None),
    })
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut form: LeadForm<ContactService> =
        LeadForm::with_values(app.contact.clone(), app.contact.values_from_inputs(&input));

    let outcome = form.submit(app.delivery.as_ref()).await;
    let view = FormView::new(&form, Notice::for_outcome(form.schema(), &outcome));

    if template.is_partial() {
        return template.render(ContactFormTemplate { form: view });
    }

    template.render(ContactTemplate {
        layout: template.layout(),
        form: view,
    })
}

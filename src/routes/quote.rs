use std::collections::HashMap;

use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use moskill_lead::{LeadForm, Notice, QuoteService};

use crate::{
    routes::{AppState, lead::FormView},
    template::{Layout, Template},
};

/// The popup, open, with its form
#[derive(askama::Template)]
#[template(path = "partials/quote-popup.html")]
pub struct QuotePopupTemplate {
    pub form: FormView,
}

/// Empty popup slot left behind once a request went through
#[derive(askama::Template)]
#[template(path = "partials/quote-closed.html")]
pub struct QuoteClosedTemplate {
    pub notice: Option<Notice>,
}

/// Full page for browsers posting without the site script
#[derive(askama::Template)]
#[template(path = "quote.html")]
pub struct QuotePageTemplate {
    pub layout: Layout,
    pub form: Option<FormView>,
    pub notice: Option<Notice>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let form: LeadForm<QuoteService> = LeadForm::new(app.quote.clone());

    template.render(QuotePopupTemplate {
        form: FormView::new(&form, None),
    })
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut form: LeadForm<QuoteService> =
        LeadForm::with_values(app.quote.clone(), app.quote.values_from_inputs(&input));

    let outcome = form.submit(app.delivery.as_ref()).await;
    let notice = Notice::for_outcome(form.schema(), &outcome);
    let closes = outcome.closes(form.schema());

    match (template.is_partial(), closes) {
        (true, true) => template.render(QuoteClosedTemplate { notice }),
        (true, false) => template.render(QuotePopupTemplate {
            form: FormView::new(&form, notice),
        }),
        (false, true) => template.render(QuotePageTemplate {
            layout: template.layout(),
            form: None,
            notice,
        }),
        (false, false) => template.render(QuotePageTemplate {
            layout: template.layout(),
            form: Some(FormView::new(&form, None)),
            notice,
        }),
    }
}

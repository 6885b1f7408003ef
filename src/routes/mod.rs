use std::{sync::Arc, time::Duration};

use axum::{Router, response::IntoResponse, routing::get};
use moskill_delivery::{DeliveryAdapter, EmailJs, SmtpRelay};
use moskill_lead::FormSchema;

use crate::{
    assets::AssetsService,
    config::{Config, Provider},
    template::{NotFoundTemplate, Template},
};

mod about;
mod contact;
mod gallery;
mod health;
mod index;
mod lead;
mod products;
mod quote;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub delivery: Arc<dyn DeliveryAdapter>,
    pub contact: Arc<FormSchema>,
    pub quote: Arc<FormSchema>,
}

impl AppState {
    pub fn new(config: Config, delivery: Arc<dyn DeliveryAdapter>) -> Self {
        let contact = Arc::new(FormSchema::contact(
            config.forms.contact.template_id.to_owned(),
        ));
        let quote = Arc::new(FormSchema::quote(
            config.forms.quote.template_id.to_owned(),
        ));

        Self {
            config,
            delivery,
            contact,
            quote,
        }
    }

    /// Builds the delivery adapter selected by `delivery.provider`.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let timeout = config.delivery.timeout_secs.map(Duration::from_secs);

        let delivery: Arc<dyn DeliveryAdapter> = match config.delivery.provider {
            Provider::EmailJs => Arc::new(EmailJs::new(&config.delivery.emailjs, timeout)?),
            Provider::Smtp => Arc::new(SmtpRelay::new(&config.delivery.smtp)?),
        };

        Ok(Self::new(config, delivery))
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let layout = template.layout();

    (
        axum::http::StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate { layout }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/services", get(services::page))
        .route("/gallery", get(gallery::page))
        .route("/products/{slug}", get(products::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/quote", get(quote::page).post(quote::action))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::config::{PopupConfig, SiteConfig};

/// Header set by the site script on requests that expect a fragment back
pub const PARTIAL_HEADER: &str = "ts-request";

pub fn is_partial(headers: &HeaderMap) -> bool {
    headers.contains_key(PARTIAL_HEADER)
}

/// Data every full page needs for the shared layout
#[derive(Clone)]
pub struct Layout {
    pub site: SiteConfig,
    pub current_path: String,
    /// Set on pages mounting the quote popup
    pub popup_delay_ms: Option<u64>,
}

impl Layout {
    pub fn is_active(&self, path: &str) -> bool {
        match path {
            "/" => self.current_path == "/",
            _ => self.current_path.starts_with(path),
        }
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.site.primary_phone())
    }
}

pub struct Template {
    site: SiteConfig,
    popup: PopupConfig,
    current_path: String,
    partial: bool,
}

impl Template {
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn layout(&self) -> Layout {
        Layout {
            site: self.site.clone(),
            current_path: self.current_path.to_owned(),
            popup_delay_ms: None,
        }
    }

    pub fn layout_with_popup(&self) -> Layout {
        Layout {
            popup_delay_ms: self.popup.enabled.then_some(self.popup.delay_ms),
            ..self.layout()
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("{err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            site: state.config.site.clone(),
            popup: state.config.popup.clone(),
            current_path: parts.uri.path().to_owned(),
            partial: is_partial(&parts.headers),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

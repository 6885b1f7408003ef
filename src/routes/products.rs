use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    catalog::{self, Media, Product},
    template::{Layout, NotFoundTemplate, Template},
};

#[derive(askama::Template)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub layout: Layout,
    pub product: &'static Product,
    pub media: Vec<Media>,
}

pub async fn page(template: Template, Path(slug): Path<String>) -> impl IntoResponse {
    let Some(product) = catalog::find(&slug) else {
        let layout = template.layout();
        return (
            StatusCode::NOT_FOUND,
            template.render(NotFoundTemplate { layout }),
        )
            .into_response();
    };

    template
        .render(ProductTemplate {
            layout: template.layout_with_popup(),
            product,
            media: product.media(),
        })
        .into_response()
}

use axum::response::IntoResponse;

use crate::{
    catalog::{self, Product},
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub layout: Layout,
    pub products: &'static [Product],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        layout: template.layout(),
        products: catalog::products(),
    })
}

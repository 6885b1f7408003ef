use axum::response::IntoResponse;

use crate::{
    catalog::{self, Product},
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub layout: Layout,
    pub products: &'static [Product],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ServicesTemplate {
        layout: template.layout(),
        products: catalog::products(),
    })
}

use axum::response::IntoResponse;

use crate::{
    catalog,
    template::{Layout, Template},
};

pub struct GalleryItem {
    pub title: &'static str,
    pub href: String,
    pub image: &'static str,
}

#[derive(askama::Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub layout: Layout,
    pub items: Vec<GalleryItem>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    let items = catalog::products()
        .iter()
        .flat_map(|product| {
            product.images().map(move |image| GalleryItem {
                title: product.name,
                href: format!("/products/{}", product.slug),
                image,
            })
        })
        .collect();

    template.render(GalleryTemplate {
        layout: template.layout(),
        items,
    })
}

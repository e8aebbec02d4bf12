use actix_web::{web, HttpResponse, Responder};
use crate::models::Product;
use crate::services::ProductCatalog;

#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "Full product catalog in declaration order", body = Vec<Product>)
    )
)]
pub async fn list_products(catalog: web::Data<ProductCatalog>) -> impl Responder {
    let products = catalog.list_products();
    log::info!("📦 GET /products - {} products", products.len());
    HttpResponse::Ok().json(products)
}

//! HTTP handlers for the Products API

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    auth::{basic_auth_middleware, BasicAuth},
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, ProductDraft};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductDraft),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router.
///
/// Reads are open; create/update/delete require Basic authentication.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    auth: BasicAuth,
) -> Router {
    let shared_service = Arc::new(service);

    let read = Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product));

    let write = Router::new()
        .route("/", axum::routing::post(create_product))
        .route(
            "/{id}",
            axum::routing::put(update_product).delete(delete_product),
        )
        .route_layer(middleware::from_fn_with_state(auth, basic_auth_middleware));

    read.merge(write).with_state(shared_service)
}

/// List the full catalog
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this id"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
) -> ProductResult<Response> {
    // Absent id yields an empty 404, matching the read contract
    match service.get_product(id).await? {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductDraft,
    security(("basic_auth" = [])),
    responses(
        (status = 201, description = "Product created, Location points at it", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(draft): ValidatedJson<ProductDraft>,
) -> ProductResult<Response> {
    let product = service.create_product(draft).await?;
    let location = format!("/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    )
        .into_response())
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = ProductDraft,
    security(("basic_auth" = [])),
    responses(
        (status = 204, description = "Product replaced"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
    ValidatedJson(draft): ValidatedJson<ProductDraft>,
) -> ProductResult<StatusCode> {
    service.update_product(id, draft).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    security(("basic_auth" = [])),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
) -> ProductResult<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Axum CRUD handlers for products, services, and demands.
//!
//! Reads are open; writes require a bearer session and, for update/delete,
//! ownership of the record. The existence check always runs before the
//! ownership check so a non-owner probing a missing id sees the same 404 as
//! everyone else.

use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::accounts::session::{Session, SharedSessions, authenticate};
use crate::error::{AppError, AppResult};

use super::store::SharedCatalog;
use super::types::{
    Category, CreateDemandRequest, CreateProductRequest, CreateServiceRequest, Demand, DemandKind,
    Hall, ListingStatus, MAX_CONDITION, Product, ProductType, Record, Service, ServiceCategory,
    UpdateDemandRequest, UpdateProductRequest, UpdateServiceRequest,
};

const DEFAULT_PAGE_SIZE: usize = 20;
const SIMILAR_PRODUCTS_LIMIT: usize = 4;

fn ensure_owner<T: Record>(record: &T, session: &Session) -> AppResult<()> {
    if record.owner_email() != session.email {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

fn non_empty_title(title: &str) -> AppResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

fn valid_price(price: f64, label: &str) -> AppResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest(format!(
            "{label} must be a non-negative number"
        )));
    }
    Ok(price)
}

fn valid_condition(condition: i64) -> AppResult<u8> {
    if !(1..=MAX_CONDITION as i64).contains(&condition) {
        return Err(AppError::BadRequest(format!(
            "Condition must be between 1 and {MAX_CONDITION}"
        )));
    }
    Ok(condition as u8)
}

fn parse_category(input: &str) -> AppResult<Category> {
    Category::from_input(input)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown category: {input}")))
}

fn parse_service_category(input: &str) -> AppResult<ServiceCategory> {
    ServiceCategory::from_input(input)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown service category: {input}")))
}

fn parse_hall(input: &str) -> AppResult<Hall> {
    Hall::from_input(input).ok_or_else(|| AppError::BadRequest(format!("Unknown hall: {input}")))
}

// ---- products ---------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub sort: Option<String>,
    pub category: Option<String>,
    /// Product id to leave out of a similar-products listing.
    pub exclude: Option<String>,
    /// When true, return the whole catalog unpaginated for client-side search.
    pub for_search: Option<bool>,
}

/// `GET /products` serves three shapes: the full list for client-side search
/// (`forSearch=true`), a short similar-products list (`category` + `exclude`),
/// and offset pagination otherwise.
pub async fn handle_list_products(
    Extension(catalog): Extension<SharedCatalog>,
    Query(params): Query<ProductListParams>,
) -> AppResult<Json<Value>> {
    let mut products = catalog.products()?;

    if params.for_search.unwrap_or(false) {
        let total = products.len();
        return Ok(Json(json!({ "products": products, "total": total })));
    }

    if let Some(category) = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        let wanted = category.to_uppercase();
        products.retain(|p| p.category.as_str() == wanted);
    }

    if let Some(exclude) = params.exclude.as_deref().filter(|e| !e.trim().is_empty()) {
        let similar: Vec<Product> = products
            .into_iter()
            .filter(|p| p.id != exclude)
            .take(params.limit.unwrap_or(SIMILAR_PRODUCTS_LIMIT))
            .collect();
        return Ok(Json(json!({ "products": similar })));
    }

    match params.sort.as_deref() {
        Some("price_asc") => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        Some("price_desc") => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        // Snapshot order is already newest-first.
        _ => {}
    }

    let offset = params.offset.unwrap_or(0);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let total = products.len();
    let page: Vec<Product> = products.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total;

    Ok(Json(json!({
        "products": page,
        "total": total,
        "hasMore": has_more,
        "nextOffset": if has_more { Some(offset + limit) } else { None },
    })))
}

pub async fn handle_get_product(
    Extension(catalog): Extension<SharedCatalog>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let product = catalog.product(&id)?.ok_or(AppError::NotFound("Product"))?;
    Ok(Json(json!({ "product": product })))
}

pub async fn handle_create_product(
    Extension(catalog): Extension<SharedCatalog>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
    Json(req): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let session = authenticate(&headers, sessions.as_ref())?;

    let product = Product {
        id: Uuid::new_v4().to_string(),
        title: non_empty_title(&req.title)?,
        description: req.description,
        price: valid_price(req.price, "Price")?,
        category: parse_category(&req.category)?,
        product_type: match req.product_type.as_deref() {
            Some(raw) => ProductType::from_input(raw)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown product type: {raw}")))?,
            None => ProductType::Sell,
        },
        status: ListingStatus::Available,
        condition: valid_condition(req.condition)?,
        address_hall: parse_hall(&req.address_hall)?,
        images: req.images,
        owner_email: session.email,
        created_at: Utc::now(),
    };

    catalog.put_product(product.clone())?;
    tracing::info!("product {} created by {}", product.id, product.owner_email);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "product": product })),
    ))
}

pub async fn handle_update_product(
    Extension(catalog): Extension<SharedCatalog>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> AppResult<Json<Value>> {
    let session = authenticate(&headers, sessions.as_ref())?;
    let mut product = catalog.product(&id)?.ok_or(AppError::NotFound("Product"))?;
    ensure_owner(&product, &session)?;

    if let Some(title) = req.title {
        product.title = non_empty_title(&title)?;
    }
    if let Some(description) = req.description {
        product.description = Some(description);
    }
    if let Some(price) = req.price {
        product.price = valid_price(price, "Price")?;
    }
    if let Some(category) = req.category {
        product.category = parse_category(&category)?;
    }
    if let Some(product_type) = req.product_type {
        product.product_type = ProductType::from_input(&product_type)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown product type: {product_type}")))?;
    }
    if let Some(status) = req.status {
        product.status = ListingStatus::from_input(&status)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {status}")))?;
    }
    if let Some(condition) = req.condition {
        product.condition = valid_condition(condition)?;
    }
    if let Some(hall) = req.address_hall {
        product.address_hall = parse_hall(&hall)?;
    }
    if let Some(images) = req.images {
        product.images = images;
    }

    catalog.put_product(product.clone())?;

    Ok(Json(json!({ "success": true, "product": product })))
}

pub async fn handle_delete_product(
    Extension(catalog): Extension<SharedCatalog>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let session = authenticate(&headers, sessions.as_ref())?;
    let product = catalog.product(&id)?.ok_or(AppError::NotFound("Product"))?;
    ensure_owner(&product, &session)?;

    catalog.remove_product(&id)?;
    tracing::info!("product {} deleted by {}", id, session.email);

    Ok(Json(
        json!({ "success": true, "message": "Product deleted" }),
    ))
}

// ---- services ---------------------------------------------------------------

pub async fn handle_list_services(
    Extension(catalog): Extension<SharedCatalog>,
) -> AppResult<Json<Value>> {
    let services = catalog.services()?;
    Ok(Json(json!({ "services": services })))
}

pub async fn handle_get_service(
    Extension(catalog): Extension<SharedCatalog>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let service = catalog.service(&id)?.ok_or(AppError::NotFound("Service"))?;
    Ok(Json(json!({ "service": service })))
}

pub async fn handle_create_service(
    Extension(catalog): Extension<SharedCatalog>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
    Json(req): Json<CreateServiceRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let session = authenticate(&headers, sessions.as_ref())?;

    let min_price = valid_price(req.min_price, "Minimum price")?;
    let max_price = valid_price(req.max_price, "Maximum price")?;
    if min_price > max_price {
        return Err(AppError::BadRequest(
            "Minimum price cannot exceed maximum price".to_string(),
        ));
    }

    let service = Service {
        id: Uuid::new_v4().to_string(),
        title: non_empty_title(&req.title)?,
        description: req.description,
        min_price,
        max_price,
        category: parse_service_category(&req.category)?,
        experience: req.experience.unwrap_or_default().trim().to_string(),
        address_hall: parse_hall(&req.address_hall)?,
        images: req.images,
        owner_email: session.email,
        created_at: Utc::now(),
    };

    catalog.put_service(service.clone())?;
    tracing::info!("service {} created by {}", service.id, service.owner_email);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "service": service })),
    ))
}

pub async fn handle_update_service(
    Extension(catalog): Extension<SharedCatalog>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdateServiceRequest>,
) -> AppResult<Json<Value>> {
    let session = authenticate(&headers, sessions.as_ref())?;
    let mut service = catalog.service(&id)?.ok_or(AppError::NotFound("Service"))?;
    ensure_owner(&service, &session)?;

    if let Some(title) = req.title {
        service.title = non_empty_title(&title)?;
    }
    if let Some(description) = req.description {
        service.description = Some(description);
    }
    if let Some(min_price) = req.min_price {
        service.min_price = valid_price(min_price, "Minimum price")?;
    }
    if let Some(max_price) = req.max_price {
        service.max_price = valid_price(max_price, "Maximum price")?;
    }
    if service.min_price > service.max_price {
        return Err(AppError::BadRequest(
            "Minimum price cannot exceed maximum price".to_string(),
        ));
    }
    if let Some(category) = req.category {
        service.category = parse_service_category(&category)?;
    }
    if let Some(experience) = req.experience {
        service.experience = experience.trim().to_string();
    }
    if let Some(hall) = req.address_hall {
        service.address_hall = parse_hall(&hall)?;
    }
    if let Some(images) = req.images {
        service.images = images;
    }

    catalog.put_service(service.clone())?;

    Ok(Json(json!({ "success": true, "service": service })))
}

pub async fn handle_delete_service(
    Extension(catalog): Extension<SharedCatalog>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let session = authenticate(&headers, sessions.as_ref())?;
    let service = catalog.service(&id)?.ok_or(AppError::NotFound("Service"))?;
    ensure_owner(&service, &session)?;

    catalog.remove_service(&id)?;
    tracing::info!("service {} deleted by {}", id, session.email);

    Ok(Json(
        json!({ "success": true, "message": "Service deleted" }),
    ))
}

// ---- demands ----------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct DemandListParams {
    /// Optional kind filter: "product" or "service".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

pub async fn handle_list_demands(
    Extension(catalog): Extension<SharedCatalog>,
    Query(params): Query<DemandListParams>,
) -> AppResult<Json<Value>> {
    let mut demands = catalog.demands()?;

    if let Some(kind) = params
        .kind
        .as_deref()
        .and_then(|raw| DemandKind::from_input(raw))
    {
        demands.retain(|d| d.kind == kind);
    }

    Ok(Json(json!({ "demands": demands })))
}

pub async fn handle_get_demand(
    Extension(catalog): Extension<SharedCatalog>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let demand = catalog.demand(&id)?.ok_or(AppError::NotFound("Demand"))?;
    Ok(Json(json!({ "demand": demand })))
}

pub async fn handle_create_demand(
    Extension(catalog): Extension<SharedCatalog>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
    Json(req): Json<CreateDemandRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let session = authenticate(&headers, sessions.as_ref())?;

    let kind = DemandKind::from_input(&req.kind)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown demand kind: {}", req.kind)))?;

    let (product_category, service_category) = match kind {
        DemandKind::Product => (Some(parse_category(&req.category)?), None),
        DemandKind::Service => (None, Some(parse_service_category(&req.category)?)),
    };

    let demand = Demand {
        id: Uuid::new_v4().to_string(),
        title: non_empty_title(&req.title)?,
        description: req.description,
        kind,
        product_category,
        service_category,
        owner_email: session.email,
        created_at: Utc::now(),
    };

    catalog.put_demand(demand.clone())?;
    tracing::info!("demand {} created by {}", demand.id, demand.owner_email);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "demand": demand })),
    ))
}

pub async fn handle_update_demand(
    Extension(catalog): Extension<SharedCatalog>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdateDemandRequest>,
) -> AppResult<Json<Value>> {
    let session = authenticate(&headers, sessions.as_ref())?;
    let mut demand = catalog.demand(&id)?.ok_or(AppError::NotFound("Demand"))?;
    ensure_owner(&demand, &session)?;

    if let Some(title) = req.title {
        demand.title = non_empty_title(&title)?;
    }
    if let Some(description) = req.description {
        demand.description = Some(description);
    }
    if let Some(category) = req.category {
        match demand.kind {
            DemandKind::Product => demand.product_category = Some(parse_category(&category)?),
            DemandKind::Service => {
                demand.service_category = Some(parse_service_category(&category)?)
            }
        }
    }

    catalog.put_demand(demand.clone())?;

    Ok(Json(json!({ "success": true, "demand": demand })))
}

pub async fn handle_delete_demand(
    Extension(catalog): Extension<SharedCatalog>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let session = authenticate(&headers, sessions.as_ref())?;
    let demand = catalog.demand(&id)?.ok_or(AppError::NotFound("Demand"))?;
    ensure_owner(&demand, &session)?;

    catalog.remove_demand(&id)?;
    tracing::info!("demand {} deleted by {}", id, session.email);

    Ok(Json(json!({ "success": true, "message": "Demand deleted" })))
}

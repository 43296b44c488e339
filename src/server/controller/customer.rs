use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        customer::{CreateCustomerDto, CustomerDto, LoyaltyPointsDto, UpdateCustomerDto},
    },
    server::{
        error::AppError,
        model::customer::{CreateCustomerParams, Customer, UpdateCustomerParams},
        service::customer::CustomerService,
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

#[derive(Deserialize)]
pub struct CustomerQuery {
    pub search: Option<String>,
}

/// Register a customer.
///
/// # Returns
/// - `201 Created` - The created customer
/// - `400 Bad Request` - Invalid customer data
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/customers",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let params = CreateCustomerParams::from_dto(payload)?;

    let customer = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(customer.into_dto())))
}

/// List customers, newest first, optionally filtered by a search term matched against
/// name, email and phone.
#[utoipa::path(
    get,
    path = "/customers",
    tag = CUSTOMER_TAG,
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring filter")
    ),
    responses(
        (status = 200, description = "Customers", body = Vec<CustomerDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customers = service.get_all(query.search.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(
            customers
                .into_iter()
                .map(Customer::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer", body = CustomerDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customer = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

/// Update a customer. Omitted fields keep their current value.
///
/// # Returns
/// - `200 OK` - The updated customer
/// - `400 Bad Request` - Invalid field value
/// - `404 Not Found` - Customer does not exist
/// - `409 Conflict` - Email belongs to another customer
#[utoipa::path(
    patch,
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let params = UpdateCustomerParams::from_dto(payload)?;

    let customer = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Award loyalty points.
///
/// Adds the points to the customer's balance and then advances the membership tier
/// by at most one step (SILVER at 1000, GOLD at 2500, PLATINUM at 5000).
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Customer ID
/// - `payload` - Points to add
///
/// # Returns
/// - `200 OK` - Customer with the new balance and tier
/// - `400 Bad Request` - Balance would become negative
/// - `404 Not Found` - Customer does not exist
#[utoipa::path(
    post,
    path = "/customers/{id}/loyalty-points",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = LoyaltyPointsDto,
    responses(
        (status = 200, description = "Points awarded", body = CustomerDto),
        (status = 400, description = "Balance would become negative", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_loyalty_points(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LoyaltyPointsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customer = service.add_loyalty_points(id, payload.points).await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

//! Route table, OpenAPI document and HTTP layers.

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        analytics, asset, customer, dock, feedback, health, maintenance, service_request, visit,
    },
    middleware::auth::require_bearer,
    state::AppState,
};

/// Local development origins allowed alongside `FRONTEND_URL`.
const DEV_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:5174",
];

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        analytics::get_dashboard,
        analytics::get_revenue,
        analytics::get_customer_insights,
        analytics::get_service_analytics,
        analytics::get_maintenance_analytics,
        analytics::get_occupancy,
        customer::create_customer,
        customer::get_customers,
        customer::get_customer_by_id,
        customer::update_customer,
        customer::delete_customer,
        customer::add_loyalty_points,
        visit::create_visit,
        visit::get_visits,
        visit::get_current_visits,
        visit::get_visit_by_id,
        visit::update_visit,
        visit::delete_visit,
        dock::create_dock,
        dock::get_docks,
        dock::get_dock_stats,
        dock::get_dock_by_id,
        dock::update_dock,
        dock::delete_dock,
        service_request::create_service_request,
        service_request::get_service_requests,
        service_request::get_service_request_by_id,
        service_request::update_service_request,
        service_request::delete_service_request,
        feedback::create_feedback,
        feedback::get_feedback,
        feedback::get_feedback_stats,
        feedback::get_feedback_by_id,
        feedback::update_feedback,
        feedback::delete_feedback,
        asset::create_asset,
        asset::get_assets,
        asset::get_asset_stats,
        asset::get_asset_by_id,
        asset::update_asset,
        asset::delete_asset,
        maintenance::create_maintenance_record,
        maintenance::get_maintenance_records,
        maintenance::get_upcoming_maintenance,
        maintenance::get_overdue_maintenance,
        maintenance::get_maintenance_stats,
        maintenance::predict_maintenance_costs,
        maintenance::get_maintenance_record_by_id,
        maintenance::update_maintenance_record,
        maintenance::delete_maintenance_record,
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "analytics", description = "Read-only business summaries"),
        (name = "customer", description = "Customer records and loyalty"),
        (name = "visit", description = "Boat visits"),
        (name = "dock", description = "Berths"),
        (name = "service-request", description = "Customer service requests"),
        (name = "feedback", description = "Customer feedback"),
        (name = "asset", description = "Marina equipment and facilities"),
        (name = "maintenance", description = "Maintenance scheduling and costs"),
    ),
    info(
        title = "Marina Back-Office API",
        description = "Customers, visits, docks, service requests, feedback, assets, maintenance and analytics",
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// `/health` and the API docs are public. Every other route passes through the
/// bearer guard, which is a no-op when no token is configured.
///
/// # Arguments
/// - `state` - Shared application state
/// - `frontend_url` - Extra allowed CORS origin; `None` allows any origin
pub fn router(state: AppState, frontend_url: Option<&str>) -> Router {
    let api = Router::new()
        .route("/analytics/dashboard", get(analytics::get_dashboard))
        .route("/analytics/revenue", get(analytics::get_revenue))
        .route("/analytics/customers", get(analytics::get_customer_insights))
        .route("/analytics/services", get(analytics::get_service_analytics))
        .route("/analytics/maintenance", get(analytics::get_maintenance_analytics))
        .route("/analytics/occupancy", get(analytics::get_occupancy))
        .route(
            "/customers",
            post(customer::create_customer).get(customer::get_customers),
        )
        .route(
            "/customers/{id}",
            get(customer::get_customer_by_id)
                .patch(customer::update_customer)
                .delete(customer::delete_customer),
        )
        .route(
            "/customers/{id}/loyalty-points",
            post(customer::add_loyalty_points),
        )
        .route("/visits", post(visit::create_visit).get(visit::get_visits))
        .route("/visits/current", get(visit::get_current_visits))
        .route(
            "/visits/{id}",
            get(visit::get_visit_by_id)
                .patch(visit::update_visit)
                .delete(visit::delete_visit),
        )
        .route("/docks", post(dock::create_dock).get(dock::get_docks))
        .route("/docks/stats", get(dock::get_dock_stats))
        .route(
            "/docks/{id}",
            get(dock::get_dock_by_id)
                .patch(dock::update_dock)
                .delete(dock::delete_dock),
        )
        .route(
            "/service-requests",
            post(service_request::create_service_request)
                .get(service_request::get_service_requests),
        )
        .route(
            "/service-requests/{id}",
            get(service_request::get_service_request_by_id)
                .patch(service_request::update_service_request)
                .delete(service_request::delete_service_request),
        )
        .route(
            "/feedback",
            post(feedback::create_feedback).get(feedback::get_feedback),
        )
        .route("/feedback/stats", get(feedback::get_feedback_stats))
        .route(
            "/feedback/{id}",
            get(feedback::get_feedback_by_id)
                .patch(feedback::update_feedback)
                .delete(feedback::delete_feedback),
        )
        .route("/assets", post(asset::create_asset).get(asset::get_assets))
        .route("/assets/stats", get(asset::get_asset_stats))
        .route(
            "/assets/{id}",
            get(asset::get_asset_by_id)
                .patch(asset::update_asset)
                .delete(asset::delete_asset),
        )
        .route(
            "/maintenance",
            post(maintenance::create_maintenance_record)
                .get(maintenance::get_maintenance_records),
        )
        .route(
            "/maintenance/upcoming",
            get(maintenance::get_upcoming_maintenance),
        )
        .route("/maintenance/overdue", get(maintenance::get_overdue_maintenance))
        .route("/maintenance/stats", get(maintenance::get_maintenance_stats))
        .route(
            "/maintenance/predict-costs",
            get(maintenance::predict_maintenance_costs),
        )
        .route(
            "/maintenance/{id}",
            get(maintenance::get_maintenance_record_by_id)
                .patch(maintenance::update_maintenance_record)
                .delete(maintenance::delete_maintenance_record),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route("/health", get(health::health))
        .merge(api)
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(frontend_url))
        .with_state(state)
}

/// CORS policy: any origin by default, otherwise the dev origins plus `frontend_url`.
fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    let Some(frontend_url) = frontend_url else {
        return layer.allow_origin(Any);
    };

    let origins: Vec<HeaderValue> = DEV_ORIGINS
        .iter()
        .copied()
        .chain(std::iter::once(frontend_url))
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use test_utils::builder::TestBuilder;

    async fn app(token: Option<&str>) -> (test_utils::context::TestContext, Router) {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let router = router(AppState::new(db, token.map(str::to_string)), None);
        (test, router)
    }

    fn get_request(uri: &str, bearer: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let (_test, app) = app(Some("s3cret")).await;

        let response = app.oneshot(get_request("/health", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    /// Expected: 401 without the token, 200 with it
    #[tokio::test]
    async fn api_routes_require_bearer_token() {
        let (_test, app) = app(Some("s3cret")).await;

        let rejected = app
            .clone()
            .oneshot(get_request("/docks", None))
            .await
            .unwrap();
        assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);

        let accepted = app
            .oneshot(get_request("/docks", Some("s3cret")))
            .await
            .unwrap();
        assert_eq!(accepted.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn open_api_when_no_token_configured() {
        let (_test, app) = app(None).await;

        let response = app
            .oneshot(get_request("/analytics/occupancy", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let (_test, app) = app(None).await;

        let response = app
            .oneshot(get_request("/customers/404", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Expected: 201 on create, 409 on a duplicate email
    #[tokio::test]
    async fn create_customer_then_conflict() {
        let (_test, app) = app(None).await;
        let body = r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#;
        let post = || {
            Request::builder()
                .method(Method::POST)
                .uri("/customers")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap()
        };

        let created = app.clone().oneshot(post()).await.unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let duplicate = app.oneshot(post()).await.unwrap();
        assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn negative_months_is_bad_request() {
        let (_test, app) = app(None).await;

        let response = app
            .oneshot(get_request("/maintenance/predict-costs?months=-1", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn zero_months_uses_default_horizon() {
        let (_test, app) = app(None).await;

        let response = app
            .oneshot(get_request("/analytics/maintenance?months=0", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (_test, app) = app(Some("s3cret")).await;

        let response = app
            .oneshot(get_request("/api-docs/openapi.json", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

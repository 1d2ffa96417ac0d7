use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{attendance, auth, event, group, health, qr};
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tower_cookies::CookieManagerLayer;
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/change-password", post(auth::change_password))

        // Registration form data
        .route("/api/v1/groups", get(group::list_groups))

        // Participant surface
        .route("/api/v1/me/qr", get(qr::my_qr))
        .route("/api/v1/me/attendance", get(attendance::my_attendance))

        // Scanning station
        .route("/api/v1/scan", post(attendance::scan))

        // Operator surface
        .route("/api/v1/admin/events", post(event::create_event).get(event::list_events))
        .route("/api/v1/admin/events/{event_id}/activate", post(event::activate_event))
        .route("/api/v1/admin/attendance", get(attendance::list_attendance))
        .route("/api/v1/admin/attendance/{record_id}", put(attendance::edit_attendance).delete(attendance::delete_attendance))
        .route("/api/v1/admin/groups", post(group::create_group))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        participant_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

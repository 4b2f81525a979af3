use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        contacts::{
            create_contact, delete_contact, get_contact, list_contacts, list_emails, list_phones,
        },
        health::{healthz, livez},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for the contact endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // Contact routes with CORS. The static /emails and /phones segments win
    // over the dynamic {id} segment.
    let contact_routes = Router::new()
        .route("/contact", get(list_contacts).post(create_contact))
        .route("/contact/emails", get(list_emails))
        .route("/contact/phones", get(list_phones))
        .route("/contact/{id}", get(get_contact).delete(delete_contact))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(contact_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn post_contact(name: &str, email: &str, phone: &str, message: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/contact")
            .header("Content-Type", "application/json")
            .body(Body::from(format!(
                r#"{{"name":"{name}","email":"{email}","phone":"{phone}","message":"{message}"}}"#
            )))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app.oneshot(get_request("/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_ok() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app.oneshot(get_request("/healthz")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_contacts_empty() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app.oneshot(get_request("/contact")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();

        assert!(json.is_empty());
    }

    #[tokio::test]
    async fn test_submit_and_get_contact() {
        let state = AppState::default();
        let app = create_app(state);

        // Submit a contact
        let response = app
            .clone()
            .oneshot(post_contact("Ana", "a@x.com", "111", "hi"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let contact: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(contact["id"], 1);
        assert_eq!(contact["name"], "Ana");
        assert_eq!(contact["email"], "a@x.com");
        assert_eq!(contact["phone"], "111");
        assert_eq!(contact["message"], "hi");

        // Get it back by the returned id
        let response = app.oneshot(get_request("/contact/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let fetched: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(fetched, contact);
    }

    #[tokio::test]
    async fn test_get_missing_contact_returns_null_with_200() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app.oneshot(get_request("/contact/99")).await.unwrap();

        // Missing records come back as 200 with a null body, never 404
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(json.is_null());
    }

    #[tokio::test]
    async fn test_delete_contact_then_get_returns_null() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(post_contact("Jane", "jane@example.com", "222", "hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Delete the contact
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/contact/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // The record is gone
        let response = app.oneshot(get_request("/contact/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(json.is_null());
    }

    #[tokio::test]
    async fn test_delete_missing_contact_is_no_content() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/contact/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Deletes are idempotent: a missing id is still a 204
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_email_and_phone_projections_preserve_storage_order() {
        let state = AppState::default();
        let app = create_app(state);

        for (name, email, phone) in [
            ("Ana", "a@x.com", "111"),
            ("Bob", "b@x.com", "222"),
            ("Cy", "a@x.com", "111"),
        ] {
            let response = app
                .clone()
                .oneshot(post_contact(name, email, phone, "hi"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .clone()
            .oneshot(get_request("/contact/emails"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let emails: Vec<String> = serde_json::from_slice(&body).unwrap();

        // Duplicates preserved, one element per contact, in storage order
        assert_eq!(emails, vec!["a@x.com", "b@x.com", "a@x.com"]);

        let response = app.oneshot(get_request("/contact/phones")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let phones: Vec<String> = serde_json::from_slice(&body).unwrap();

        assert_eq!(phones, vec!["111", "222", "111"]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let state = AppState::default();
        let app = create_app(state);

        // Missing required fields fail with a generic framework rejection
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/contact")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name":"Ana"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}

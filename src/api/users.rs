use actix_web::{web, HttpResponse, ResponseError};
use crate::api::method_not_allowed;
use crate::models::{CreateUserRequest, User};
use crate::services::UserStore;
use crate::utils::ErrorBody;

/// Registers the user routes. Expects `web::Data<dyn UserStore>` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(
                web::resource("")
                    .route(web::post().to(create_user))
                    .route(web::get().to(list_users))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/{user_id}")
                    .route(web::get().to(get_user))
                    .default_service(web::route().to(method_not_allowed)),
            ),
    );
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "User already exists", body = ErrorBody),
        (status = 422, description = "Missing or malformed field", body = ErrorBody)
    )
)]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    log::info!("📝 POST /users - email: {}", request.email);

    match store.create_user(&request).await {
        Ok(user) => {
            log::info!("✅ User created: {} ({})", user.user_id, user.email);
            HttpResponse::Ok().json(user)
        }
        Err(e) => {
            log::warn!("❌ User creation failed: {} - {}", request.email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = String, Path, description = "Local part of the user's email")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn get_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let user_id = path.into_inner();
    log::info!("🔍 GET /users/{}", user_id);

    match store.get_user(&user_id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            log::warn!("❌ Lookup failed: {} - {}", user_id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All registered users", body = Vec<User>)
    )
)]
pub async fn list_users(store: web::Data<dyn UserStore>) -> HttpResponse {
    let users = store.list_users().await;
    log::info!("📋 GET /users - {} users", users.len());
    HttpResponse::Ok().json(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::json_config;
    use crate::config::DuplicatePolicy;
    use crate::services::InMemoryUserStore;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    macro_rules! app_with {
        ($policy:expr) => {{
            let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new($policy));
            test::init_service(
                App::new()
                    .app_data(web::Data::from(store))
                    .app_data(json_config())
                    .configure(configure),
            )
            .await
        }};
    }

    fn create(email: &str, name: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "email": email, "name": name, "password": "s3cret" }))
    }

    #[actix_web::test]
    async fn test_create_returns_user_without_password() {
        let app = app_with!(DuplicatePolicy::Strict);

        let resp = test::call_service(&app, create("alice@example.com", "Alice").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "user_id": "alice", "email": "alice@example.com", "name": "Alice" })
        );
    }

    #[actix_web::test]
    async fn test_get_created_user_and_unknown_user() {
        let app = app_with!(DuplicatePolicy::Strict);
        test::call_service(&app, create("bob@example.com", "Bob").to_request()).await;

        let req = test::TestRequest::get().uri("/users/bob").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["email"], "bob@example.com");
        assert!(body.get("password").is_none());

        let req = test::TestRequest::get().uri("/users/nobody").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "detail": "User not found" }));
    }

    #[actix_web::test]
    async fn test_list_users_contains_exactly_created_users() {
        let app = app_with!(DuplicatePolicy::Strict);
        test::call_service(&app, create("alice@example.com", "Alice").to_request()).await;
        test::call_service(&app, create("bob@example.com", "Bob").to_request()).await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!([
                { "user_id": "alice", "email": "alice@example.com", "name": "Alice" },
                { "user_id": "bob", "email": "bob@example.com", "name": "Bob" }
            ])
        );
        assert!(!body.to_string().contains("s3cret"));
    }

    #[actix_web::test]
    async fn test_strict_policy_rejects_local_part_collision() {
        let app = app_with!(DuplicatePolicy::Strict);
        test::call_service(&app, create("alice@example.com", "Alice").to_request()).await;

        let resp = test::call_service(&app, create("alice@other.com", "Other").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "detail": "User already exists" }));
    }

    #[actix_web::test]
    async fn test_literal_policy_accepts_local_part_collision() {
        let app = app_with!(DuplicatePolicy::Literal);
        test::call_service(&app, create("alice@example.com", "Alice").to_request()).await;

        let resp = test::call_service(&app, create("alice@other.com", "Other").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/users/alice").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["email"], "alice@other.com");
    }

    #[actix_web::test]
    async fn test_missing_field_is_unprocessable() {
        let app = app_with!(DuplicatePolicy::Strict);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "email": "carol@example.com", "name": "Carol" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().contains("password"));
    }

    #[actix_web::test]
    async fn test_broken_json_is_unprocessable() {
        let app = app_with!(DuplicatePolicy::Strict);

        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"email": "dave@example.com", "name": "#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());
    }

    #[actix_web::test]
    async fn test_wrong_field_type_is_unprocessable() {
        let app = app_with!(DuplicatePolicy::Strict);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "email": 1, "name": "x", "password": "y" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users, json!([]));
    }

    #[actix_web::test]
    async fn test_unsupported_method_is_405() {
        let app = app_with!(DuplicatePolicy::Strict);

        let req = test::TestRequest::delete().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "detail": "Method Not Allowed" }));

        let req = test::TestRequest::delete().uri("/users/alice").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let req = test::TestRequest::get().uri("/users/alice/extra").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

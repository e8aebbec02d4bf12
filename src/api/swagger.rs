use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Service",
        version = "1.0.0",
        description = "Read-only product catalog."
    ),
    paths(
        crate::api::products::list_products,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::Product,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Products", description = "Static product catalog."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ProductApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service",
        version = "1.0.0",
        description = "In-memory user registry. The user_id is the local part of the email; passwords are accepted but never stored or returned."
    ),
    paths(
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::users::list_users,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::CreateUserRequest,
            crate::utils::ErrorBody,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration and lookup."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct UserApiDoc;

// Route path constants - single source of truth for all API paths

pub const USERS: &str = "/users";
pub const USER_ITEM: &str = "/users/{userId}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, me, register, update_profile},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        update_profile_request::UpdateProfileRequest,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

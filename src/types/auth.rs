use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RLogin {
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginRes {
    pub token: String,
    pub username: String,
    pub id: Uuid,
}

/// One body for every login failure. Lookup miss and bad password must be
/// indistinguishable from the outside.
#[derive(Serialize, Deserialize)]
pub struct AuthFailureRes {
    pub message: String,
    pub errmsg: String,
}

impl AuthFailureRes {
    pub fn generic() -> Self {
        AuthFailureRes {
            message: "Authentication error".to_string(),
            errmsg: "Authentication error".to_string(),
        }
    }
}

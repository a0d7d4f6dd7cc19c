use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate};
use crate::utils::password;
use actix_web::{post, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use validator::Validate;

#[post("")]
async fn create(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserModel> {
    body.validate()?;

    // Invitation gate: only enforced when the deployment sets a code.
    if let Some(expected) = &config().invite_code {
        if body.invite_code.as_deref() != Some(expected.as_str()) {
            return Err(AppError::Forbidden);
        }
    }

    let password_hash = password::hash(&body.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user = db
        .create_user(DBUserCreate {
            first_name: body.first_name.clone(),
            last_name: body.last_name.clone(),
            email: body.email.clone(),
            password_hash,
        })
        .await?;

    Ok(ApiResponse::Created(user))
}

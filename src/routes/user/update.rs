use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RUserUpdate;
use actix_web::{route, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[route("/{user_id}", method = "PUT", method = "PATCH")]
async fn update(
    db: web::Data<Arc<PostgresService>>,
    user_id: web::Path<Uuid>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserModel> {
    body.validate()?;
    let user = db.update_user(&user_id, body.into_inner()).await?;
    Ok(ApiResponse::Ok(user))
}

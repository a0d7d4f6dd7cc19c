use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

#[get("/{user_id}")]
async fn get(
    db: web::Data<Arc<PostgresService>>,
    user_id: web::Path<Uuid>,
) -> ApiResult<UserModel> {
    let user = db.get_user_by_id(&user_id).await?;
    Ok(ApiResponse::Ok(user))
}

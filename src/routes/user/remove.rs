use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, web};
use entity::user::Model as UserModel;
use std::sync::Arc;
use uuid::Uuid;

#[delete("/{user_id}")]
async fn remove(
    db: web::Data<Arc<PostgresService>>,
    user_id: web::Path<Uuid>,
) -> ApiResult<UserModel> {
    // Echo back what was deleted, clients use it for the undo toast.
    let user = db.delete_user(&user_id).await?;
    Ok(ApiResponse::Ok(user))
}

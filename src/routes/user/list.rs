use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::ListQuery;
use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;

#[get("")]
async fn list(
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ListQuery>,
) -> ApiResult<Vec<UserModel>> {
    let users = db.list_users(query.skip(), query.limit()).await?;
    Ok(ApiResponse::Ok(users))
}

use actix_web::get;
use serde::Serialize;

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct HealthRes {
    pub status: &'static str,
}

#[get("")]
async fn health() -> ApiResult<HealthRes> {
    Ok(ApiResponse::Ok(HealthRes { status: "ok" }))
}

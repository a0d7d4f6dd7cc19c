use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::auth::{AuthFailureRes, LoginRes, RLogin};
use crate::types::error::AppError;
use crate::utils::{password, token::sign_session};
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

fn auth_failure() -> HttpResponse {
    HttpResponse::Unauthorized().json(AuthFailureRes::generic())
}

#[post("/login")]
async fn login(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    // Every failure past validation collapses into the same response, so the
    // caller cannot probe which emails are registered.
    let user = match db.get_user_by_email(&body.email).await {
        Ok(user) => user,
        Err(_) => return Ok(auth_failure()),
    };

    match password::verify(&body.password, &user.password_hash) {
        Ok(true) => {}
        _ => return Ok(auth_failure()),
    }

    let token = match sign_session(&config().jwt_secret, user.id, &user.email) {
        Ok(token) => token,
        Err(_) => return Ok(auth_failure()),
    };

    Ok(HttpResponse::Ok().json(LoginRes {
        token,
        username: user.email,
        id: user.id,
    }))
}

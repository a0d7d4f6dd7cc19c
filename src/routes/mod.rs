use actix_web::web;

pub mod auth;
pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/users")
                    .service(user::create::create)
                    .service(user::list::list)
                    .service(user::get::get)
                    .service(user::update::update)
                    .service(user::remove::remove),
            )
            .service(web::scope("/auth").service(auth::login::login)),
    );
}

use entity::user::Model as UserModel;
use roster_api::db::postgres_service::PostgresService;
use roster_api::types::{error::AppError, user::DBUserCreate};
use roster_api::utils::password;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        actix_web::App::new()
            .app_data(actix_web::web::Data::new(Arc::clone(&self.db)))
            .configure(roster_api::routes::configure_routes)
    }

    /// Seed a user straight through the store, bypassing HTTP.
    #[allow(dead_code)]
    pub async fn create_test_user(
        &self,
        email: Option<String>,
        plain_password: &str,
    ) -> Result<UserModel, AppError> {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let password_hash = password::hash(plain_password).expect("Failed to hash password");

        self.db
            .create_user(DBUserCreate {
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                email,
                password_hash,
            })
            .await
    }
}

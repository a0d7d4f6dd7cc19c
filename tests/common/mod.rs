use roster_api::config::{EnvConfig, CONFIG};
use roster_api::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

/// One config per test binary. OnceLock only takes the first value, so a
/// binary that needs the invite gate must not share a process with one that
/// does not.
#[allow(dead_code)]
pub fn init_test_config() {
    let _ = CONFIG.set(test_config(None));
}

#[allow(dead_code)]
pub fn init_test_config_with_invite(code: &str) {
    let _ = CONFIG.set(test_config(Some(code.to_string())));
}

fn test_config(invite_code: Option<String>) -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        jwt_secret: "test-secret".to_string(),
        invite_code,
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use roster_api::types::user::RUserCreate;

    pub const PASSWORD: &str = "Sup3rS3cret!pass";

    pub fn sample_user() -> RUserCreate {
        sample_user_with_email("test@example.com")
    }

    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            password: PASSWORD.to_string(),
            invite_code: None,
        }
    }
}

use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub jwt_secret: String,
    /// When set, user creation requires the body to carry this code.
    pub invite_code: Option<String>,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env("PORT").parse().unwrap_or(8080),
            db_url: Self::get_env("POSTGRES_URI"),
            jwt_secret: Self::get_env("JWT_SECRET"),
            invite_code: env::var("INVITE_CODE").ok(),
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Same shape the mobile clients have always sent: local@domain.tld with a
// 2-4 character top-level domain.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w\-.]+)@((?:\w+\.)+)([a-zA-Z]{2,4})$").unwrap());

/// Lowercase + trim, applied before every store write and lookup.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RUserCreate {
    #[validate(length(min = 1, message = "is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub last_name: String,
    #[validate(regex(path = *EMAIL_RE, message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    pub invite_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RUserUpdate {
    #[validate(regex(path = *EMAIL_RE, message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub last_name: String,
}

pub struct DBUserCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl ListQuery {
    pub const DEFAULT_LIMIT: u64 = 50;

    pub fn skip(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}

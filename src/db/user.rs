use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    user::{normalize_email, DBUserCreate, RUserUpdate},
};
use chrono::Utc;
use entity::user::{
    ActiveModel as UserActive, AttendedEvents, Column as UserColumn, Entity as User,
    Model as UserModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr,
};
use uuid::Uuid;

/// Concurrent writers can both pass an exists check, so duplicate emails are
/// settled by the unique index and translated here.
fn on_unique_violation(e: DbErr, email: &str) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("User {} already exists", email))
        }
        _ => e.into(),
    }
}

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(UserColumn::Email.eq(normalize_email(email)))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(UserColumn::Email.eq(normalize_email(email)))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Newest first, the order the admin panel pages through.
    pub async fn list_users(&self, skip: u64, limit: u64) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_desc(UserColumn::CreatedAt)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let email = normalize_email(&payload.email);

        UserActive {
            id: Set(Uuid::new_v4()),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            email: Set(email.clone()),
            password_hash: Set(payload.password_hash),
            created_at: Set(Utc::now()),
            events_attended: Set(AttendedEvents::default()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| on_unique_violation(e, &email))
    }

    pub async fn update_user(&self, id: &Uuid, changes: RUserUpdate) -> Result<UserModel, AppError> {
        let current = self.get_user_by_id(id).await?;

        let email = normalize_email(&changes.email);
        if email != current.email && self.user_exists_by_email(&email).await? {
            return Err(AppError::Conflict(format!("User {} already exists", email)));
        }

        let mut am: UserActive = current.into();
        am.email = Set(email.clone());
        am.first_name = Set(changes.first_name);
        am.last_name = Set(changes.last_name);
        am.update(&self.db)
            .await
            .map_err(|e| on_unique_violation(e, &email))
    }

    /// Hard delete. Returns the row as it was, so callers can echo it back.
    pub async fn delete_user(&self, id: &Uuid) -> Result<UserModel, AppError> {
        let user = self.get_user_by_id(id).await?;
        User::delete_by_id(*id).exec(&self.db).await?;
        Ok(user)
    }
}

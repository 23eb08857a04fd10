//! User repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_core::types::UserId;
use hostel_entity::user::{CreateUser, User, UserSummary};

use super::is_unique_violation;

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by username (exact match).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// List every account for the admin views.
    pub async fn list_summaries(&self) -> AppResult<Vec<UserSummary>> {
        sqlx::query_as::<_, UserSummary>("SELECT username, email, role FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Count all users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password, role, created_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password)
        .bind(data.role)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "users.username") {
                AppError::duplicate_identity(format!(
                    "Username '{}' already exists",
                    data.username
                ))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create user", e)
            }
        })
    }

    /// Return the user named in `data`, creating it when missing.
    ///
    /// The boolean is `true` when a new row was inserted.
    pub async fn ensure(&self, data: &CreateUser) -> AppResult<(User, bool)> {
        if let Some(existing) = self.find_by_username(&data.username).await? {
            return Ok((existing, false));
        }
        match self.create(data).await {
            Ok(user) => Ok((user, true)),
            Err(e) if e.kind == ErrorKind::DuplicateIdentity => self
                .find_by_username(&data.username)
                .await?
                .map(|user| (user, false))
                .ok_or(e),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support::memory_pool;
    use hostel_entity::user::UserRole;

    fn new_user(username: &str, role: UserRole) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "secret".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = UserRepository::new(memory_pool().await);
        let user = repo.create(&new_user("amina", UserRole::User)).await.unwrap();
        assert_eq!(user.role, UserRole::User);

        let found = repo.find_by_username("amina").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.password, "secret");
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let repo = UserRepository::new(memory_pool().await);
        repo.create(&new_user("amina", UserRole::User)).await.unwrap();
        let err = repo
            .create(&new_user("amina", UserRole::User))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateIdentity);
    }

    #[tokio::test]
    async fn test_ensure_is_idempotent() {
        let repo = UserRepository::new(memory_pool().await);
        let (_, created) = repo.ensure(&new_user("admin", UserRole::Admin)).await.unwrap();
        assert!(created);
        let (admin, created) = repo.ensure(&new_user("admin", UserRole::Admin)).await.unwrap();
        assert!(!created);
        assert!(admin.is_admin());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_summaries() {
        let repo = UserRepository::new(memory_pool().await);
        repo.create(&new_user("a", UserRole::Admin)).await.unwrap();
        repo.create(&new_user("b", UserRole::User)).await.unwrap();

        let users = repo.list_summaries().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username, "b");
        assert_eq!(users[1].email, "b@example.com");
    }
}

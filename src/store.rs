//! PostgreSQL adapter: users table DDL and identifier-keyed CRUD.

use crate::error::AppError;
use crate::model::User;
use crate::repository::UserRepository;
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// `UserRepository` backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        const SQL: &str = "SELECT id, name, email, phone FROM users ORDER BY id";
        tracing::debug!(sql = SQL, "query");
        let rows = sqlx::query_as::<_, User>(SQL).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        const SQL: &str = "SELECT id, name, email, phone FROM users WHERE id = $1";
        tracing::debug!(sql = SQL, id, "query");
        let row = sqlx::query_as::<_, User>(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, user: User) -> Result<User, AppError> {
        let row = match user.id {
            None => {
                const SQL: &str = "INSERT INTO users (name, email, phone) VALUES ($1, $2, $3) \
                     RETURNING id, name, email, phone";
                tracing::debug!(sql = SQL, "save (insert)");
                sqlx::query_as::<_, User>(SQL)
                    .bind(&user.name)
                    .bind(&user.email)
                    .bind(&user.phone)
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                const SQL: &str = "INSERT INTO users (id, name, email, phone) VALUES ($1, $2, $3, $4) \
                     ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, email = EXCLUDED.email, phone = EXCLUDED.phone \
                     RETURNING id, name, email, phone";
                tracing::debug!(sql = SQL, id, "save (upsert)");
                sqlx::query_as::<_, User>(SQL)
                    .bind(id)
                    .bind(&user.name)
                    .bind(&user.email)
                    .bind(&user.phone)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        const SQL: &str = "DELETE FROM users WHERE id = $1";
        tracing::debug!(sql = SQL, id, "delete");
        sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}

/// Idempotent users table DDL. Call at startup before serving requests.
pub async fn ensure_users_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(AppError::Db)?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::Db(sqlx::Error::Configuration("DATABASE_URL: no path".into())))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_name_is_last_path_segment() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost:5432/users").unwrap();
        assert_eq!(admin, "postgres://localhost:5432/postgres");
        assert_eq!(name, "users");
    }

    #[test]
    fn db_name_drops_query_string() {
        let (_, name) = parse_db_name_from_url("postgres://h/users?sslmode=disable").unwrap();
        assert_eq!(name, "users");
    }

    #[test]
    fn quoted_ident_escapes_quotes() {
        assert_eq!(quote_ident("us\"ers"), "\"us\\\"ers\"");
    }
}

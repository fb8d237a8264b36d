//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === User Repository ===

    /// Create a new user with a pre-hashed password
    pub async fn create_user(
        &self,
        name: &str,
        surname: &str,
        nickname: &str,
        password_hash: &str,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, surname, nickname, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, surname, nickname, password_hash, registration_date
            "#,
        )
        .bind(name)
        .bind(surname)
        .bind(nickname)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by nickname
    pub async fn get_user_by_nickname(&self, nickname: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, surname, nickname, password_hash, registration_date
            FROM users
            WHERE nickname = $1
            "#,
        )
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    // === Word Repository ===

    /// Insert a new word pair
    pub async fn insert_word(&self, english_word: &str, turkish_word: &str) -> Result<DbWordPair> {
        let word = sqlx::query_as::<_, DbWordPair>(
            r#"
            INSERT INTO words (english_word, turkish_word)
            VALUES ($1, $2)
            RETURNING id, english_word, turkish_word
            "#,
        )
        .bind(english_word)
        .bind(turkish_word)
        .fetch_one(&self.pool)
        .await?;

        Ok(word)
    }

    /// Get every word pair in insertion order
    pub async fn all_words(&self) -> Result<Vec<DbWordPair>> {
        let words = sqlx::query_as::<_, DbWordPair>(
            r#"
            SELECT id, english_word, turkish_word
            FROM words
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    // === Analysis Repository ===

    /// Insert a completed quiz analysis
    pub async fn insert_analysis(&self, analysis: &DbAnalysis) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO analyses (id, user_id, direction, prompts, correct_options,
                                  selected_options, words_count, correct_count, wrong_count,
                                  success_rate, elapsed_ms, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(analysis.id)
        .bind(analysis.user_id)
        .bind(&analysis.direction)
        .bind(&analysis.prompts)
        .bind(&analysis.correct_options)
        .bind(&analysis.selected_options)
        .bind(analysis.words_count)
        .bind(analysis.correct_count)
        .bind(analysis.wrong_count)
        .bind(analysis.success_rate)
        .bind(analysis.elapsed_ms)
        .bind(analysis.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get one analysis by ID
    pub async fn get_analysis(&self, id: Uuid) -> Result<Option<DbAnalysis>> {
        let analysis = sqlx::query_as::<_, DbAnalysis>(
            r#"
            SELECT id, user_id, direction, prompts, correct_options, selected_options,
                   words_count, correct_count, wrong_count, success_rate, elapsed_ms, created_at
            FROM analyses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(analysis)
    }

    /// List analyses joined with their owner's nickname.
    ///
    /// `user_id` narrows to one user's history (the dashboard view);
    /// `direction` filters by practice direction. Ordering comes from the
    /// [`AnalysisSort`]/[`SortOrder`] whitelists, never from raw input.
    pub async fn list_analyses(
        &self,
        user_id: Option<Uuid>,
        direction: Option<&str>,
        sort: AnalysisSort,
        order: SortOrder,
    ) -> Result<Vec<AnalysisListRow>> {
        let sql = format!(
            r#"
            SELECT a.id, u.nickname, a.direction, a.words_count, a.correct_count,
                   a.wrong_count, a.success_rate, a.elapsed_ms, a.created_at
            FROM analyses a
            JOIN users u ON u.id = a.user_id
            WHERE ($1::uuid IS NULL OR a.user_id = $1)
              AND ($2::text IS NULL OR a.direction = $2)
            ORDER BY a.{} {}
            "#,
            sort.as_column(),
            order.as_sql(),
        );

        let rows = sqlx::query_as::<_, AnalysisListRow>(&sql)
            .bind(user_id)
            .bind(direction)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}

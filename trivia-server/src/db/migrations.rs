//! Schema creation and seeding

use sqlx::PgPool;

use super::seed::{CATEGORIES, QUESTIONS};
use super::DbError;

/// Create the trivia tables if they don't exist.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // category is a plain integer: the reference is by value only
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS questions_category_idx ON questions (category)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

/// Insert the starter categories and questions.
///
/// Categories are upserted by id. Questions are only inserted into an empty
/// table, so running this twice leaves one copy.
pub async fn seed(pool: &PgPool) -> Result<SeedReport, DbError> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    for &(id, kind) in CATEGORIES {
        let result = sqlx::query(
            r#"
            INSERT INTO categories (id, type) VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(kind)
        .execute(&mut *tx)
        .await?;
        report.categories += result.rows_affected();
    }

    // Explicit ids bypass the sequence
    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))",
    )
    .execute(&mut *tx)
    .await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(&mut *tx)
        .await?;

    if existing == 0 {
        for &(question, answer, category, difficulty) in QUESTIONS {
            sqlx::query(
                r#"
                INSERT INTO questions (question, answer, category, difficulty)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(question)
            .bind(answer)
            .bind(category)
            .bind(difficulty)
            .execute(&mut *tx)
            .await?;
            report.questions += 1;
        }
    }

    tx.commit().await?;
    tracing::info!(
        categories = report.categories,
        questions = report.questions,
        "Seed complete"
    );
    Ok(report)
}

/// Rows inserted by [`seed`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: u64,
    pub questions: u64,
}

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewSubmission, Submission};

pub async fn create(pool: &PgPool, new: &NewSubmission) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (id, name, email, message, date_time, created_at)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.message)
    .bind(&new.date_time)
    .bind(new.created_at)
    .fetch_one(pool)
    .await
}

/// Every stored submission, in whatever order Postgres returns them.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>("SELECT * FROM submissions")
        .fetch_all(pool)
        .await
}

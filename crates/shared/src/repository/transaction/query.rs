use crate::{
    abstract_trait::transaction::repository::TransactionQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{error, info};

#[derive(Clone)]
pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_by_date_after(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT id, customer_id, transaction_date, amount
            FROM transactions
            WHERE transaction_date > $1
            ORDER BY transaction_date, id;
        "#;

        let rows = sqlx::query_as::<_, TransactionModel>(sql)
            .bind(date)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_by_date_after({date}): {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        info!("✅ Loaded {} transactions after {date}", rows.len());

        Ok(rows)
    }

    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT id, customer_id, transaction_date, amount
            FROM transactions
            WHERE customer_id = $1
            ORDER BY transaction_date, id;
        "#;

        let rows = sqlx::query_as::<_, TransactionModel>(sql)
            .bind(customer_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_by_customer_id({customer_id}): {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        info!(
            "✅ Loaded {} transactions for customer {customer_id}",
            rows.len()
        );

        Ok(rows)
    }

    async fn find_by_customer_id_and_date_between(
        &self,
        customer_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT id, customer_id, transaction_date, amount
            FROM transactions
            WHERE customer_id = $1
              AND transaction_date BETWEEN $2 AND $3
            ORDER BY transaction_date, id;
        "#;

        let rows = sqlx::query_as::<_, TransactionModel>(sql)
            .bind(customer_id)
            .bind(start)
            .bind(end)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!(
                    "❌ Database error in find_by_customer_id_and_date_between({customer_id}, {start}, {end}): {e:?}"
                );
                RepositoryError::Sqlx(e)
            })?;

        info!(
            "✅ Loaded {} transactions for customer {customer_id} between {start} and {end}",
            rows.len()
        );

        Ok(rows)
    }
}

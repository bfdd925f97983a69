//! In-memory transaction store backing the service and router tests.

use crate::{
    abstract_trait::transaction::repository::TransactionQueryRepositoryTrait,
    errors::RepositoryError, model::transaction::TransactionModel,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

/// A query received by [`InMemoryTransactionRepository`], recorded in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreQuery {
    DateAfter(NaiveDate),
    CustomerId(i64),
    CustomerIdAndDateBetween(i64, NaiveDate, NaiveDate),
}

/// Holds rows in insertion order and answers queries in that same order.
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    rows: RwLock<Vec<TransactionModel>>,
    queries: RwLock<Vec<StoreQuery>>,
    fail_on_query: RwLock<bool>,
}

impl InMemoryTransactionRepository {
    pub fn with_rows(rows: Vec<TransactionModel>) -> Self {
        Self {
            rows: RwLock::new(rows),
            ..Self::default()
        }
    }

    pub async fn insert(&self, row: TransactionModel) {
        self.rows.write().await.push(row);
    }

    pub async fn set_fail_on_query(&self, fail: bool) {
        *self.fail_on_query.write().await = fail;
    }

    pub async fn queries(&self) -> Vec<StoreQuery> {
        self.queries.read().await.clone()
    }

    async fn select(
        &self,
        query: StoreQuery,
        keep: impl Fn(&TransactionModel) -> bool + Send,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        self.queries.write().await.push(query);

        if *self.fail_on_query.read().await {
            return Err(RepositoryError::Custom(
                "transaction store unavailable".to_string(),
            ));
        }

        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| keep(*row))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for InMemoryTransactionRepository {
    async fn find_by_date_after(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        self.select(StoreQuery::DateAfter(date), move |row| {
            row.transaction_date > date
        })
        .await
    }

    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        self.select(StoreQuery::CustomerId(customer_id), move |row| {
            row.customer_id == customer_id
        })
        .await
    }

    async fn find_by_customer_id_and_date_between(
        &self,
        customer_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        self.select(
            StoreQuery::CustomerIdAndDateBetween(customer_id, start, end),
            move |row| {
                row.customer_id == customer_id
                    && row.transaction_date >= start
                    && row.transaction_date <= end
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(id: i64, customer_id: i64, date: &str) -> TransactionModel {
        TransactionModel {
            id,
            customer_id,
            transaction_date: date.parse().unwrap(),
            amount: dec!(10.00),
        }
    }

    fn store() -> InMemoryTransactionRepository {
        InMemoryTransactionRepository::with_rows(vec![
            row(1, 7, "2025-06-30"),
            row(2, 7, "2025-07-01"),
            row(3, 8, "2025-07-15"),
            row(4, 7, "2025-07-31"),
            row(5, 7, "2025-08-01"),
        ])
    }

    fn ids(rows: &[TransactionModel]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn date_after_excludes_the_threshold_day() {
        let store = store();
        let rows = store
            .find_by_date_after("2025-07-01".parse().unwrap())
            .await
            .unwrap();

        assert_eq!(ids(&rows), vec![3, 4, 5]);
    }

    #[tokio::test]
    async fn between_is_inclusive_on_both_ends() {
        let store = store();
        let rows = store
            .find_by_customer_id_and_date_between(
                7,
                "2025-07-01".parse().unwrap(),
                "2025-07-31".parse().unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(ids(&rows), vec![2, 4]);
    }

    #[tokio::test]
    async fn customer_lookup_keeps_insertion_order() {
        let store = store();
        store.insert(row(0, 7, "2024-01-01")).await;

        let rows = store.find_by_customer_id(7).await.unwrap();

        assert_eq!(ids(&rows), vec![1, 2, 4, 5, 0]);
        assert_eq!(store.queries().await, vec![StoreQuery::CustomerId(7)]);
    }

    #[tokio::test]
    async fn failing_store_reports_repository_error() {
        let store = store();
        store.set_fail_on_query(true).await;

        let err = store.find_by_customer_id(7).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Custom(_)));
    }
}

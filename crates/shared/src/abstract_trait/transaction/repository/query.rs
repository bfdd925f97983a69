use crate::{errors::RepositoryError, model::transaction::TransactionModel};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

/// Read side of the transaction store.
///
/// Every query returns rows in the store's own order; callers pass that order
/// through untouched.
#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    /// Transactions dated strictly after `date`.
    async fn find_by_date_after(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;

    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;

    /// Transactions of `customer_id` dated within `[start, end]`.
    async fn find_by_customer_id_and_date_between(
        &self,
        customer_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;
}

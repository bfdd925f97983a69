use crate::{
    domain::{
        requests::YearMonth,
        responses::{RewardSummaryResponse, TransactionResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub type DynRewardQueryService = Arc<dyn RewardQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait RewardQueryServiceTrait {
    /// Resolves the optional listing filters into one of the selection paths.
    ///
    /// A month wins over a bare customer id; with neither, the recent
    /// three-month window is listed.
    async fn list_transactions(
        &self,
        customer_id: Option<i64>,
        month: Option<YearMonth>,
    ) -> Result<Vec<TransactionResponse>, ServiceError>;

    async fn find_last_three_months(&self) -> Result<Vec<TransactionResponse>, ServiceError>;

    async fn find_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<TransactionResponse>, ServiceError>;

    async fn find_by_customer_and_month(
        &self,
        customer_id: i64,
        month: YearMonth,
    ) -> Result<Vec<TransactionResponse>, ServiceError>;

    async fn find_by_customer_and_range(
        &self,
        customer_id: Option<i64>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionResponse>, ServiceError>;

    async fn calculate_rewards(
        &self,
        customer_id: i64,
    ) -> Result<RewardSummaryResponse, ServiceError>;
}

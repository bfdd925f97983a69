use crate::{
    abstract_trait::{
        reward::service::RewardQueryServiceTrait,
        transaction::repository::DynTransactionQueryRepository,
    },
    domain::{
        requests::YearMonth,
        responses::{RewardSummaryResponse, TransactionResponse},
    },
    errors::ServiceError,
    model::transaction::TransactionModel,
    service::reward::{selector::TransactionSelector, summary::summarize},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

pub struct RewardQueryService {
    selector: TransactionSelector,
}

impl RewardQueryService {
    pub async fn new(query: DynTransactionQueryRepository) -> Self {
        Self {
            selector: TransactionSelector::new(query),
        }
    }
}

fn to_responses(transactions: Vec<TransactionModel>) -> Vec<TransactionResponse> {
    transactions
        .into_iter()
        .map(TransactionResponse::from)
        .collect()
}

#[async_trait]
impl RewardQueryServiceTrait for RewardQueryService {
    async fn list_transactions(
        &self,
        customer_id: Option<i64>,
        month: Option<YearMonth>,
    ) -> Result<Vec<TransactionResponse>, ServiceError> {
        match (month, customer_id) {
            (Some(month), customer_id) => {
                info!("🗓️ Listing transactions for month {month} | customer: {customer_id:?}");
                self.find_by_customer_and_range(customer_id, month.first_day(), month.last_day())
                    .await
            }
            (None, Some(customer_id)) => self.find_by_customer(customer_id).await,
            (None, None) => self.find_last_three_months().await,
        }
    }

    async fn find_last_three_months(&self) -> Result<Vec<TransactionResponse>, ServiceError> {
        info!("🕒 Fetching transactions from the last three months");

        let transactions = self.selector.last_three_months().await?;

        Ok(to_responses(transactions))
    }

    async fn find_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<TransactionResponse>, ServiceError> {
        let transactions = self.selector.by_customer(customer_id).await?;

        Ok(to_responses(transactions))
    }

    async fn find_by_customer_and_month(
        &self,
        customer_id: i64,
        month: YearMonth,
    ) -> Result<Vec<TransactionResponse>, ServiceError> {
        let transactions = self
            .selector
            .by_customer_and_month(customer_id, month)
            .await?;

        Ok(to_responses(transactions))
    }

    async fn find_by_customer_and_range(
        &self,
        customer_id: Option<i64>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionResponse>, ServiceError> {
        let transactions = self
            .selector
            .by_customer_and_range(customer_id, start, end)
            .await?;

        Ok(to_responses(transactions))
    }

    async fn calculate_rewards(
        &self,
        customer_id: i64,
    ) -> Result<RewardSummaryResponse, ServiceError> {
        info!("🎁 Calculating rewards for customer {customer_id}");

        let transactions = self.selector.by_customer(customer_id).await?;
        let summary = summarize(customer_id, transactions);

        info!(
            "✅ Customer {customer_id} earned {} points over {} transactions",
            summary.total_points,
            summary.transactions.len()
        );

        Ok(summary)
    }
}

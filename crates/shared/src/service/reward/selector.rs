use crate::{
    abstract_trait::transaction::repository::DynTransactionQueryRepository,
    domain::requests::YearMonth, errors::ServiceError, model::transaction::TransactionModel,
};
use chrono::{Local, Months, NaiveDate};
use tracing::{error, info, warn};

/// Turns listing filters into a date range and the matching store query.
#[derive(Clone)]
pub struct TransactionSelector {
    query: DynTransactionQueryRepository,
}

impl TransactionSelector {
    pub fn new(query: DynTransactionQueryRepository) -> Self {
        Self { query }
    }

    /// Everything after the date three calendar months before today.
    pub async fn last_three_months(&self) -> Result<Vec<TransactionModel>, ServiceError> {
        self.last_three_months_as_of(Local::now().date_naive())
            .await
    }

    pub async fn last_three_months_as_of(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<TransactionModel>, ServiceError> {
        // chrono clamps to the last valid day, so May 31 becomes Feb 28/29.
        let start = today
            .checked_sub_months(Months::new(3))
            .unwrap_or(NaiveDate::MIN);

        self.select(None, start, today).await
    }

    /// All transactions of one customer, with no date bound.
    pub async fn by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<TransactionModel>, ServiceError> {
        info!("👤 Fetching all transactions for customer {customer_id}");

        let transactions = self
            .query
            .find_by_customer_id(customer_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch transactions for customer {customer_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        if transactions.is_empty() {
            warn!("⚠️ No transactions for customer {customer_id}");
            return Err(ServiceError::NotFound(format!(
                "No Transactions found for customerId :{customer_id}"
            )));
        }

        Ok(transactions)
    }

    pub async fn by_customer_and_month(
        &self,
        customer_id: i64,
        month: YearMonth,
    ) -> Result<Vec<TransactionModel>, ServiceError> {
        self.by_customer_and_range(Some(customer_id), month.first_day(), month.last_day())
            .await
    }

    /// With a customer the range is `[start, end]`; without one only the lower
    /// bound applies and the store is asked for rows strictly after `start`.
    pub async fn by_customer_and_range(
        &self,
        customer_id: Option<i64>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionModel>, ServiceError> {
        self.select(customer_id, start, end).await
    }

    async fn select(
        &self,
        customer_id: Option<i64>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionModel>, ServiceError> {
        if start > end {
            warn!("📅 Rejected range: start {start} is after end {end}");
            return Err(ServiceError::InvalidRange { start, end });
        }

        info!(
            "🔍 Selecting transactions | customer: {:?}, start: {start}, end: {end}",
            customer_id
        );

        let result = match customer_id {
            Some(id) => {
                self.query
                    .find_by_customer_id_and_date_between(id, start, end)
                    .await
            }
            None => self.query.find_by_date_after(start).await,
        };

        let transactions = result.map_err(|e| {
            error!("❌ Failed to select transactions between {start} and {end}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if transactions.is_empty() {
            // Any listing without a customer reports the recent-activity message.
            let message = match customer_id {
                Some(id) => format!(
                    "No Transactions found for customerId: {id} between {start} and {end}"
                ),
                None => "No Transactions found in last three months".to_string(),
            };
            warn!("⚠️ {message}");
            return Err(ServiceError::NotFound(message));
        }

        info!("✅ Selected {} transactions", transactions.len());

        Ok(transactions)
    }
}

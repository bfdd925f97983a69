use crate::domain::responses::TransactionResponse;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Loyalty points earned by one customer, grouped by calendar month.
///
/// Month keys are upper-case month names (`"JULY"`) and carry no year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummaryResponse {
    pub customer_id: i64,
    pub monthly_points: BTreeMap<String, i64>,
    pub total_points: i64,
    pub transactions: Vec<TransactionResponse>,
}

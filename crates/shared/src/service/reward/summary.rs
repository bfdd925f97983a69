use crate::{
    domain::responses::{RewardSummaryResponse, TransactionResponse},
    model::transaction::TransactionModel,
    service::reward::points::{calculate_points, month_label},
};
use std::collections::BTreeMap;

/// Folds a customer's transactions into per-month and total points.
///
/// Transactions are kept in the order given. Months are keyed by name only,
/// so the same month of different years lands in one bucket.
pub fn summarize(customer_id: i64, transactions: Vec<TransactionModel>) -> RewardSummaryResponse {
    let mut monthly_points: BTreeMap<String, i64> = BTreeMap::new();
    let mut total_points: i64 = 0;

    for transaction in &transactions {
        let points = calculate_points(transaction.amount);
        let bucket = monthly_points
            .entry(month_label(transaction.transaction_date))
            .or_insert(0);
        *bucket = bucket.saturating_add(points);
        total_points = total_points.saturating_add(points);
    }

    RewardSummaryResponse {
        customer_id,
        monthly_points,
        total_points,
        transactions: transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single purchase recorded against a customer.
///
/// Rows are written by an external process and only ever read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    pub customer_id: i64,
    pub transaction_date: NaiveDate,
    pub amount: Decimal,
}

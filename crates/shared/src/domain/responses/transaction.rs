use crate::model::transaction::TransactionModel;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i64,
    pub customer_id: i64,
    pub transaction_date: NaiveDate,
    #[schema(value_type = f64, example = 120.0)]
    pub amount: Decimal,
}

impl From<TransactionModel> for TransactionResponse {
    fn from(model: TransactionModel) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            transaction_date: model.transaction_date,
            amount: model.amount,
        }
    }
}

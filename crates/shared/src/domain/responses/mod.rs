mod reward;
mod transaction;

pub use self::reward::RewardSummaryResponse;
pub use self::transaction::TransactionResponse;

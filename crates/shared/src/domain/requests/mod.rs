mod month;
mod transaction;

pub use self::month::YearMonth;
pub use self::transaction::FindTransactions;

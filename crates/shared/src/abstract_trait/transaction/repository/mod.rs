pub mod query;

pub use self::query::{DynTransactionQueryRepository, TransactionQueryRepositoryTrait};

pub mod memory;
pub mod query;

pub use self::memory::{InMemoryTransactionRepository, StoreQuery};
pub use self::query::TransactionQueryRepository;

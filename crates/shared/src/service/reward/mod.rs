mod points;
mod query;
mod selector;
mod summary;

pub use self::points::{calculate_points, month_label};
pub use self::query::RewardQueryService;
pub use self::selector::TransactionSelector;
pub use self::summary::summarize;

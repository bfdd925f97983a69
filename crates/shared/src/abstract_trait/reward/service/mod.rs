pub mod query;

pub use self::query::{DynRewardQueryService, RewardQueryServiceTrait};

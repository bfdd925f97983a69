use anyhow::Result;
use shared::{
    abstract_trait::{
        reward::service::DynRewardQueryService,
        transaction::repository::DynTransactionQueryRepository,
    },
    config::ConnectionPool,
    repository::transaction::TransactionQueryRepository,
    service::reward::RewardQueryService,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct RewardQueryDeps {
    pub service: DynRewardQueryService,
}

impl RewardQueryDeps {
    pub async fn new(repo: DynTransactionQueryRepository) -> Result<Self> {
        let service =
            Arc::new(RewardQueryService::new(repo).await) as DynRewardQueryService;

        Ok(Self { service })
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub reward_query: RewardQueryDeps,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let repo = Arc::new(TransactionQueryRepository::new(db)) as DynTransactionQueryRepository;

        Self::from_repository(repo).await
    }

    /// Builds the container on top of an already constructed store.
    pub async fn from_repository(repo: DynTransactionQueryRepository) -> Result<Self> {
        let reward_query = RewardQueryDeps::new(repo).await?;

        Ok(Self { reward_query })
    }
}

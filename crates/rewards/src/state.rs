use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::{
    abstract_trait::transaction::repository::DynTransactionQueryRepository,
    config::ConnectionPool,
};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let di_container = DependenciesInject::new(db)
            .await
            .context("Failed to initialized dependency injection container")?;

        Ok(Self { di_container })
    }

    pub async fn from_repository(repo: DynTransactionQueryRepository) -> Result<Self> {
        let di_container = DependenciesInject::from_repository(repo)
            .await
            .context("Failed to initialized dependency injection container")?;

        Ok(Self { di_container })
    }
}

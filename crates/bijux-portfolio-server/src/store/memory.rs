// SPDX-License-Identifier: Apache-2.0

use super::PortfolioStore;
use async_trait::async_trait;
use bijux_portfolio_model::{Portfolio, Project, ProjectCreate, ProjectId, ValidationError};
use tokio::sync::RwLock;

struct StoreState {
    portfolio: Portfolio,
    next_id: ProjectId,
}

/// Process-lifetime store. One lock covers both the project list and the
/// allocator so concurrent creations never share an id.
pub struct InMemoryPortfolioStore {
    state: RwLock<StoreState>,
}

impl InMemoryPortfolioStore {
    pub fn new(portfolio: Portfolio) -> Result<Self, ValidationError> {
        portfolio.validate()?;
        let next_id = portfolio.next_project_id();
        Ok(Self {
            state: RwLock::new(StoreState { portfolio, next_id }),
        })
    }

    #[must_use]
    pub fn seeded() -> Self {
        let portfolio = Portfolio::seed();
        let next_id = portfolio.next_project_id();
        Self {
            state: RwLock::new(StoreState { portfolio, next_id }),
        }
    }
}

impl Default for InMemoryPortfolioStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl PortfolioStore for InMemoryPortfolioStore {
    async fn portfolio(&self) -> Portfolio {
        self.state.read().await.portfolio.clone()
    }

    async fn list_projects(&self, skip: usize, limit: usize) -> Vec<Project> {
        self.state
            .read()
            .await
            .portfolio
            .projects
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    async fn project_by_id(&self, id: ProjectId) -> Option<Project> {
        self.state
            .read()
            .await
            .portfolio
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    async fn create_project(&self, data: ProjectCreate) -> Project {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id = id.successor();
        let project = Project::from_create(id, data);
        state.portfolio.projects.push(project.clone());
        project
    }
}

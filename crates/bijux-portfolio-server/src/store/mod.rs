// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use bijux_portfolio_model::{Portfolio, Project, ProjectCreate, ProjectId};

pub mod memory;

/// Holder of the portfolio and its id allocator.
///
/// Operations are infallible. Inputs reaching `create_project` have already
/// been validated by the handler.
#[async_trait]
pub trait PortfolioStore: Send + Sync + 'static {
    async fn portfolio(&self) -> Portfolio;

    /// Projects in insertion order from `skip`, at most `limit` of them.
    async fn list_projects(&self, skip: usize, limit: usize) -> Vec<Project>;

    async fn project_by_id(&self, id: ProjectId) -> Option<Project>;

    /// Allocates the next id and appends the project as one step.
    async fn create_project(&self, data: ProjectCreate) -> Project;
}

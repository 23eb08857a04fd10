//! Account listings and the admin dashboard summary.

use std::sync::Arc;

use serde::Serialize;

use hostel_auth::rbac::RbacEnforcer;
use hostel_core::error::AppError;
use hostel_database::repositories::{RoomRepository, UserRepository};
use hostel_entity::room::{OccupancyState, OccupancySummary};
use hostel_entity::user::UserSummary;

use crate::context::RequestContext;

/// Data shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    /// Every account.
    pub users: Vec<UserSummary>,
    /// Hostel-wide state.
    pub status: OccupancyState,
    /// Room count times capacity.
    pub total_capacity: i64,
    /// Sum of occupants.
    pub total_occupied: i64,
}

impl AdminOverview {
    fn new(users: Vec<UserSummary>, summary: OccupancySummary) -> Self {
        Self {
            users,
            status: summary.state(),
            total_capacity: summary.total_capacity,
            total_occupied: summary.total_occupied,
        }
    }
}

/// Admin-only account queries.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Room repository, for the dashboard summary.
    room_repo: Arc<RoomRepository>,
    /// Role checks.
    rbac: Arc<RbacEnforcer>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        room_repo: Arc<RoomRepository>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            user_repo,
            room_repo,
            rbac,
        }
    }

    /// Lists every account (admin).
    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<UserSummary>, AppError> {
        self.rbac.require_admin(&ctx.role)?;
        self.user_repo.list_summaries().await
    }

    /// Accounts plus occupancy, for the dashboard (admin).
    pub async fn overview(&self, ctx: &RequestContext) -> Result<AdminOverview, AppError> {
        self.rbac.require_admin(&ctx.role)?;
        let users = self.user_repo.list_summaries().await?;
        let summary = self.room_repo.summary().await?;
        Ok(AdminOverview::new(users, summary))
    }
}

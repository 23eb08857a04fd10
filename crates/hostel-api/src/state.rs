//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use hostel_auth::jwt::{JwtDecoder, JwtEncoder};
use hostel_auth::rbac::RbacEnforcer;
use hostel_auth::session::SessionManager;
use hostel_core::config::AppConfig;
use hostel_database::repositories::{
    BookingRepository, RoomRepository, SessionRepository, UserRepository,
};
use hostel_service::{AllocationService, InventoryService, RoomLocks, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db_pool: SqlitePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,
    /// Role-based access control enforcer
    pub rbac_enforcer: Arc<RbacEnforcer>,

    // ── Repositories ─────────────────────────────────────────
    /// Session repository
    pub session_repo: Arc<SessionRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Booking allocation service
    pub allocation_service: Arc<AllocationService>,
    /// Room inventory service
    pub inventory_service: Arc<InventoryService>,
    /// Account listing service
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wires repositories, auth, and services around one pool.
    pub fn new(config: AppConfig, db_pool: SqlitePool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
        let room_repo = Arc::new(RoomRepository::new(db_pool.clone()));
        let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));

        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let rbac_enforcer = Arc::new(RbacEnforcer::new());
        let session_manager = Arc::new(SessionManager::new(
            jwt_encoder,
            jwt_decoder,
            Arc::clone(&user_repo),
            Arc::clone(&session_repo),
            config.session.clone(),
        ));

        let allocation_service = Arc::new(AllocationService::new(
            booking_repo,
            RoomLocks::new(),
            Arc::clone(&rbac_enforcer),
        ));
        let inventory_service = Arc::new(InventoryService::new(Arc::clone(&room_repo)));
        let user_service = Arc::new(UserService::new(
            user_repo,
            room_repo,
            Arc::clone(&rbac_enforcer),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            session_manager,
            rbac_enforcer,
            session_repo,
            allocation_service,
            inventory_service,
            user_service,
        }
    }
}

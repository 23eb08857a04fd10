//! Repository implementations for the hostel tables.

pub mod booking;
pub mod room;
pub mod session;
pub mod user;

pub use booking::BookingRepository;
pub use room::RoomRepository;
pub use session::SessionRepository;
pub use user::UserRepository;

/// Whether an sqlx error is a violation of the named unique constraint.
///
/// SQLite does not report constraint names for unique indexes, so the
/// message is checked for the indexed column as well.
pub(crate) fn is_unique_violation(err: &sqlx::Error, column: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation()
                && (db_err.constraint().is_some_and(|c| c.contains(column))
                    || db_err.message().contains(column))
        }
        _ => false,
    }
}

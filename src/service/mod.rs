pub mod booking;
pub mod customer;
pub mod guest_booking;
pub mod hotel;

use diesel::{Connection, PgConnection};

use crate::{telemetry::spawn_blocking_with_tracing, utils::{get_pooled_connection, DbPool, PoolGetError}};

pub use booking::BookingServiceError;
pub use customer::CustomerServiceError;
pub use guest_booking::GuestBookingError;
pub use hotel::HotelServiceError;

// Checks out a connection and runs `f` on the blocking threadpool
pub(crate) async fn run_blocking<T, E, F>(
    pool: &DbPool,
    f: F
) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<PoolGetError> + From<tokio::task::JoinError> + Send + 'static
{
    let mut conn = get_pooled_connection(pool).await?;

    spawn_blocking_with_tracing(move || {
        let conn: &mut PgConnection = &mut conn;
        f(conn)
    })
    .await?
}

// Same as run_blocking, but rolls back everything `f` wrote when it returns an error
pub(crate) async fn run_in_transaction<T, E, F>(
    pool: &DbPool,
    f: F
) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<PoolGetError> + From<tokio::task::JoinError> + From<diesel::result::Error> + Send + 'static
{
    run_blocking(pool, move |conn| conn.transaction(f)).await
}

use std::{error::Error, fmt::Debug};

use diesel::PgConnection;
use thiserror::Error;

use crate::{
    db_interaction,
    domain::BookingPayload,
    models::{Booking, NewBooking},
    utils::{error_fmt_chain, violated_constraint, DbPool, PoolGetError}
};

use super::{run_blocking, run_in_transaction};

pub const CUSTOMER_FOREIGN_KEY: &str = "bookings_customer_id_fkey";
pub const HOTEL_FOREIGN_KEY: &str = "bookings_hotel_id_fkey";

#[derive(Error)]
pub enum BookingServiceError{
    #[error("That customer does not exist, a booking must reference an existing customer")]
    CustomerNotExist,
    #[error("That hotel does not exist, a booking must reference an existing hotel")]
    HotelNotExist,
    #[error("The Booking ID in the request body must match that of the Booking being updated")]
    IdMismatch,
    #[error("{0}")]
    NotFound(String),
    #[error("Failed to get connection from pool")]
    PoolError(#[from] PoolGetError),
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed due to database error")]
    QueryError(#[source] diesel::result::Error)
}

impl Debug for BookingServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl From<diesel::result::Error> for BookingServiceError {
    fn from(error: diesel::result::Error) -> Self {
        match violated_constraint(&error) {
            Some(CUSTOMER_FOREIGN_KEY) => Self::CustomerNotExist,
            Some(HOTEL_FOREIGN_KEY) => Self::HotelNotExist,
            _ => Self::QueryError(error)
        }
    }
}

fn not_found_by_id(booking_id: i64) -> BookingServiceError {
    BookingServiceError::NotFound(format!("No Booking with the id {} was found!", booking_id))
}

fn ensure_references_exist(
    conn: &mut PgConnection,
    booking: &NewBooking
) -> Result<(), BookingServiceError> {
    if !db_interaction::customer_exists(conn, booking.customer_id)? {
        return Err(BookingServiceError::CustomerNotExist)
    }

    if !db_interaction::hotel_exists(conn, booking.hotel_id)? {
        return Err(BookingServiceError::HotelNotExist)
    }

    Ok(())
}

// Must run inside a transaction, shared with guest bookings
pub(crate) fn insert_checked_booking(
    conn: &mut PgConnection,
    new_booking: &NewBooking
) -> Result<Booking, BookingServiceError> {
    ensure_references_exist(conn, new_booking)?;
    let booking = db_interaction::insert_booking(conn, new_booking)?;

    tracing::info!(
        booking_id = booking.id,
        customer_id = booking.customer_id,
        hotel_id = booking.hotel_id,
        "Created booking"
    );
    Ok(booking)
}

#[tracing::instrument(
    "Listing bookings",
    skip(pool)
)]
pub async fn list_bookings(
    pool: &DbPool
) -> Result<Vec<Booking>, BookingServiceError> {
    run_blocking(pool, move |conn| -> Result<_, BookingServiceError> {
        Ok(db_interaction::get_bookings(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Finding booking by id",
    skip(pool)
)]
pub async fn find_booking(
    pool: &DbPool,
    booking_id: i64
) -> Result<Booking, BookingServiceError> {
    run_blocking(pool, move |conn| -> Result<_, BookingServiceError> {
        db_interaction::get_booking_by_id(conn, booking_id)?
            .ok_or_else(|| not_found_by_id(booking_id))
    })
    .await
}

#[tracing::instrument(
    "Listing bookings of customer",
    skip(pool)
)]
pub async fn list_bookings_for_customer(
    pool: &DbPool,
    customer_id: i64
) -> Result<Vec<Booking>, BookingServiceError> {
    run_blocking(pool, move |conn| -> Result<_, BookingServiceError> {
        Ok(db_interaction::get_bookings_by_customer(conn, customer_id)?)
    })
    .await
}

#[tracing::instrument(
    "Creating booking",
    skip(pool)
)]
pub async fn create_booking(
    pool: &DbPool,
    payload: BookingPayload
) -> Result<Booking, BookingServiceError> {
    let new_booking = NewBooking::from(payload);

    run_in_transaction(pool, move |conn| insert_checked_booking(conn, &new_booking)).await
}

#[tracing::instrument(
    "Updating booking",
    skip(pool)
)]
pub async fn update_booking(
    pool: &DbPool,
    booking_id: i64,
    payload: BookingPayload
) -> Result<Booking, BookingServiceError> {
    if payload.id.is_some_and(|body_id| body_id != booking_id) {
        return Err(BookingServiceError::IdMismatch)
    }

    let changes = NewBooking::from(payload);

    run_in_transaction(pool, move |conn| -> Result<Booking, BookingServiceError> {
        if db_interaction::get_booking_by_id(conn, booking_id)?.is_none() {
            return Err(not_found_by_id(booking_id))
        }

        ensure_references_exist(conn, &changes)?;

        let booking = db_interaction::update_booking(conn, booking_id, &changes)?
            .ok_or_else(|| not_found_by_id(booking_id))?;

        tracing::info!(booking_id, "Updated booking");
        Ok(booking)
    })
    .await
}

#[tracing::instrument(
    "Deleting booking",
    skip(pool)
)]
pub async fn delete_booking(
    pool: &DbPool,
    booking_id: i64
) -> Result<(), BookingServiceError> {
    run_in_transaction(pool, move |conn| -> Result<_, BookingServiceError> {
        match db_interaction::delete_booking(conn, booking_id)? {
            0 => Err(not_found_by_id(booking_id)),
            _ => {
                tracing::info!(booking_id, "Deleted booking");
                Ok(())
            }
        }
    })
    .await
}

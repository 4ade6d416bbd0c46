use std::{error::Error, fmt::Debug};

use thiserror::Error;

use crate::{
    domain::GuestBookingPayload,
    models::{Booking, NewCustomer},
    utils::{error_fmt_chain, DbPool, PoolGetError}
};

use super::{booking::{insert_checked_booking, BookingServiceError}, customer::{insert_unique_customer, CustomerServiceError}, run_in_transaction};

#[derive(Error)]
pub enum GuestBookingError{
    #[error(transparent)]
    Customer(#[from] CustomerServiceError),
    #[error(transparent)]
    Booking(#[from] BookingServiceError),
    #[error("Failed to get connection from pool")]
    PoolError(#[from] PoolGetError),
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed due to database error")]
    QueryError(#[from] diesel::result::Error)
}

impl Debug for GuestBookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Creates the customer and their booking atomically, neither is kept if either fails
#[tracing::instrument(
    "Creating guest booking",
    skip(pool)
)]
pub async fn create_guest_booking(
    pool: &DbPool,
    payload: GuestBookingPayload
) -> Result<Booking, GuestBookingError> {
    let new_customer = NewCustomer::try_from(payload.customer)
        .map_err(CustomerServiceError::InvalidCustomer)?;
    let details = payload.booking;

    run_in_transaction(pool, move |conn| -> Result<Booking, GuestBookingError> {
        let customer = insert_unique_customer(conn, &new_customer)?;
        let booking = insert_checked_booking(conn, &details.for_customer(customer.id))?;

        Ok(booking)
    })
    .await
}

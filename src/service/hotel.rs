use std::{error::Error, fmt::Debug};

use diesel::PgConnection;
use thiserror::Error;

use crate::{
    db_interaction,
    domain::{HotelPayload, ValidationErrors},
    models::{Hotel, NewHotel},
    utils::{error_fmt_chain, violated_constraint, DbPool, PoolGetError}
};

use super::{run_blocking, run_in_transaction};

pub const PHONE_UNIQUE_CONSTRAINT: &str = "hotels_phone_number_unique";

#[derive(Error)]
pub enum HotelServiceError{
    #[error("Invalid hotel supplied")]
    InvalidHotel(#[source] ValidationErrors),
    #[error("That phone number is already used, please use a unique phone number")]
    PhoneNotUnique,
    #[error("The Hotel ID in the request body must match that of the Hotel being updated")]
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

impl Debug for HotelServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl From<diesel::result::Error> for HotelServiceError {
    fn from(error: diesel::result::Error) -> Self {
        match violated_constraint(&error) {
            Some(PHONE_UNIQUE_CONSTRAINT) => Self::PhoneNotUnique,
            _ => Self::QueryError(error)
        }
    }
}

fn not_found_by_id(hotel_id: i64) -> HotelServiceError {
    HotelServiceError::NotFound(format!("No Hotel with the id {} was found!", hotel_id))
}

fn ensure_unique_phone(
    conn: &mut PgConnection,
    hotel: &NewHotel,
    own_id: Option<i64>
) -> Result<(), HotelServiceError> {
    let existing = db_interaction::get_hotel_by_phone(conn, &hotel.phone_number)?;

    match existing {
        Some(other) if Some(other.id) != own_id => Err(HotelServiceError::PhoneNotUnique),
        _ => Ok(())
    }
}

#[tracing::instrument(
    "Listing hotels",
    skip(pool)
)]
pub async fn list_hotels(
    pool: &DbPool,
    name: Option<String>
) -> Result<Vec<Hotel>, HotelServiceError> {
    run_blocking(pool, move |conn| -> Result<_, HotelServiceError> {
        Ok(db_interaction::get_hotels(conn, name.as_deref())?)
    })
    .await
}

#[tracing::instrument(
    "Finding hotel by id",
    skip(pool)
)]
pub async fn find_hotel(
    pool: &DbPool,
    hotel_id: i64
) -> Result<Hotel, HotelServiceError> {
    run_blocking(pool, move |conn| -> Result<_, HotelServiceError> {
        db_interaction::get_hotel_by_id(conn, hotel_id)?
            .ok_or_else(|| not_found_by_id(hotel_id))
    })
    .await
}

#[tracing::instrument(
    "Finding hotel by phone number",
    skip(pool)
)]
pub async fn find_hotel_by_phone(
    pool: &DbPool,
    phone_number: String
) -> Result<Hotel, HotelServiceError> {
    run_blocking(pool, move |conn| -> Result<_, HotelServiceError> {
        db_interaction::get_hotel_by_phone(conn, &phone_number)?
            .ok_or_else(|| HotelServiceError::NotFound(
                format!("No Hotel with the phone number {} was found!", phone_number)
            ))
    })
    .await
}

#[tracing::instrument(
    "Listing hotels by postal code",
    skip(pool)
)]
pub async fn list_hotels_by_postal_code(
    pool: &DbPool,
    postal_code: String
) -> Result<Vec<Hotel>, HotelServiceError> {
    run_blocking(pool, move |conn| -> Result<_, HotelServiceError> {
        Ok(db_interaction::get_hotels_by_postal_code(conn, &postal_code)?)
    })
    .await
}

#[tracing::instrument(
    "Listing hotels by location",
    skip(pool)
)]
pub async fn list_hotels_by_location(
    pool: &DbPool,
    location: String
) -> Result<Vec<Hotel>, HotelServiceError> {
    run_blocking(pool, move |conn| -> Result<_, HotelServiceError> {
        Ok(db_interaction::get_hotels_by_location(conn, &location)?)
    })
    .await
}

#[tracing::instrument(
    "Creating hotel",
    skip(pool)
)]
pub async fn create_hotel(
    pool: &DbPool,
    payload: HotelPayload
) -> Result<Hotel, HotelServiceError> {
    let new_hotel = NewHotel::try_from(payload)
        .map_err(HotelServiceError::InvalidHotel)?;

    run_in_transaction(pool, move |conn| -> Result<Hotel, HotelServiceError> {
        ensure_unique_phone(conn, &new_hotel, None)?;
        let hotel = db_interaction::insert_hotel(conn, &new_hotel)?;

        tracing::info!(hotel_id = hotel.id, "Created hotel {}", hotel.name);
        Ok(hotel)
    })
    .await
}

#[tracing::instrument(
    "Updating hotel",
    skip(pool)
)]
pub async fn update_hotel(
    pool: &DbPool,
    hotel_id: i64,
    payload: HotelPayload
) -> Result<Hotel, HotelServiceError> {
    if payload.id.is_some_and(|body_id| body_id != hotel_id) {
        return Err(HotelServiceError::IdMismatch)
    }

    let changes = NewHotel::try_from(payload)
        .map_err(HotelServiceError::InvalidHotel)?;

    run_in_transaction(pool, move |conn| -> Result<Hotel, HotelServiceError> {
        if db_interaction::get_hotel_by_id(conn, hotel_id)?.is_none() {
            return Err(not_found_by_id(hotel_id))
        }

        ensure_unique_phone(conn, &changes, Some(hotel_id))?;

        let hotel = db_interaction::update_hotel(conn, hotel_id, &changes)?
            .ok_or_else(|| not_found_by_id(hotel_id))?;

        tracing::info!(hotel_id, "Updated hotel");
        Ok(hotel)
    })
    .await
}

#[tracing::instrument(
    "Deleting hotel",
    skip(pool)
)]
pub async fn delete_hotel(
    pool: &DbPool,
    hotel_id: i64
) -> Result<(), HotelServiceError> {
    run_in_transaction(pool, move |conn| -> Result<_, HotelServiceError> {
        match db_interaction::delete_hotel(conn, hotel_id)? {
            0 => Err(not_found_by_id(hotel_id)),
            _ => {
                tracing::info!(hotel_id, "Deleted hotel and its bookings");
                Ok(())
            }
        }
    })
    .await
}

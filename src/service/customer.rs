use std::{error::Error, fmt::Debug};

use diesel::PgConnection;
use thiserror::Error;

use crate::{
    db_interaction,
    domain::{CustomerPayload, ValidationErrors},
    models::{Customer, NewCustomer},
    utils::{error_fmt_chain, violated_constraint, DbPool, PoolGetError}
};

use super::{run_blocking, run_in_transaction};

pub const EMAIL_UNIQUE_CONSTRAINT: &str = "customers_email_unique";
pub const PHONE_UNIQUE_CONSTRAINT: &str = "customers_phone_number_unique";

#[derive(Error)]
pub enum CustomerServiceError{
    #[error("Invalid customer supplied")]
    InvalidCustomer(#[source] ValidationErrors),
    #[error("That email is already used, please use a unique email")]
    EmailNotUnique,
    #[error("That phone number is already used, please use a unique phone number")]
    PhoneNotUnique,
    #[error("The Customer ID in the request body must match that of the Customer being updated")]
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

impl Debug for CustomerServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Unique violations reach us here when a concurrent request wins the race past the pre-checks
impl From<diesel::result::Error> for CustomerServiceError {
    fn from(error: diesel::result::Error) -> Self {
        match violated_constraint(&error) {
            Some(EMAIL_UNIQUE_CONSTRAINT) => Self::EmailNotUnique,
            Some(PHONE_UNIQUE_CONSTRAINT) => Self::PhoneNotUnique,
            _ => Self::QueryError(error)
        }
    }
}

fn not_found_by_id(customer_id: i64) -> CustomerServiceError {
    CustomerServiceError::NotFound(format!("No Customer with the id {} was found!", customer_id))
}

// `own_id` is the customer being updated, its current email/phone don't count as taken
fn ensure_unique(
    conn: &mut PgConnection,
    customer: &NewCustomer,
    own_id: Option<i64>
) -> Result<(), CustomerServiceError> {
    let taken_by_other = |existing: Option<Customer>| {
        existing.is_some_and(|c| Some(c.id) != own_id)
    };

    if taken_by_other(db_interaction::get_customer_by_email(conn, &customer.email)?) {
        return Err(CustomerServiceError::EmailNotUnique)
    }

    if taken_by_other(db_interaction::get_customer_by_phone(conn, &customer.phone_number)?) {
        return Err(CustomerServiceError::PhoneNotUnique)
    }

    Ok(())
}

// Must run inside a transaction, shared with guest bookings
pub(crate) fn insert_unique_customer(
    conn: &mut PgConnection,
    new_customer: &NewCustomer
) -> Result<Customer, CustomerServiceError> {
    ensure_unique(conn, new_customer, None)?;
    let customer = db_interaction::insert_customer(conn, new_customer)?;

    tracing::info!(customer_id = customer.id, "Created customer {}", customer.name);
    Ok(customer)
}

#[tracing::instrument(
    "Listing customers",
    skip(pool)
)]
pub async fn list_customers(
    pool: &DbPool,
    name: Option<String>
) -> Result<Vec<Customer>, CustomerServiceError> {
    run_blocking(pool, move |conn| -> Result<_, CustomerServiceError> {
        Ok(db_interaction::get_customers(conn, name.as_deref())?)
    })
    .await
}

#[tracing::instrument(
    "Finding customer by id",
    skip(pool)
)]
pub async fn find_customer(
    pool: &DbPool,
    customer_id: i64
) -> Result<Customer, CustomerServiceError> {
    run_blocking(pool, move |conn| -> Result<_, CustomerServiceError> {
        db_interaction::get_customer_by_id(conn, customer_id)?
            .ok_or_else(|| not_found_by_id(customer_id))
    })
    .await
}

#[tracing::instrument(
    "Finding customer by email",
    skip(pool)
)]
pub async fn find_customer_by_email(
    pool: &DbPool,
    email: String
) -> Result<Customer, CustomerServiceError> {
    run_blocking(pool, move |conn| -> Result<_, CustomerServiceError> {
        db_interaction::get_customer_by_email(conn, &email)?
            .ok_or_else(|| CustomerServiceError::NotFound(
                format!("No Customer with the email {} was found!", email)
            ))
    })
    .await
}

#[tracing::instrument(
    "Finding customer by phone number",
    skip(pool)
)]
pub async fn find_customer_by_phone(
    pool: &DbPool,
    phone_number: String
) -> Result<Customer, CustomerServiceError> {
    run_blocking(pool, move |conn| -> Result<_, CustomerServiceError> {
        db_interaction::get_customer_by_phone(conn, &phone_number)?
            .ok_or_else(|| CustomerServiceError::NotFound(
                format!("No Customer with the phone number {} was found!", phone_number)
            ))
    })
    .await
}

#[tracing::instrument(
    "Creating customer",
    skip(pool)
)]
pub async fn create_customer(
    pool: &DbPool,
    payload: CustomerPayload
) -> Result<Customer, CustomerServiceError> {
    let new_customer = NewCustomer::try_from(payload)
        .map_err(CustomerServiceError::InvalidCustomer)?;

    run_in_transaction(pool, move |conn| insert_unique_customer(conn, &new_customer)).await
}

#[tracing::instrument(
    "Updating customer",
    skip(pool)
)]
pub async fn update_customer(
    pool: &DbPool,
    customer_id: i64,
    payload: CustomerPayload
) -> Result<Customer, CustomerServiceError> {
    if payload.id.is_some_and(|body_id| body_id != customer_id) {
        return Err(CustomerServiceError::IdMismatch)
    }

    let changes = NewCustomer::try_from(payload)
        .map_err(CustomerServiceError::InvalidCustomer)?;

    run_in_transaction(pool, move |conn| -> Result<Customer, CustomerServiceError> {
        if db_interaction::get_customer_by_id(conn, customer_id)?.is_none() {
            return Err(not_found_by_id(customer_id))
        }

        ensure_unique(conn, &changes, Some(customer_id))?;

        let customer = db_interaction::update_customer(conn, customer_id, &changes)?
            .ok_or_else(|| not_found_by_id(customer_id))?;

        tracing::info!(customer_id, "Updated customer");
        Ok(customer)
    })
    .await
}

#[tracing::instrument(
    "Deleting customer",
    skip(pool)
)]
pub async fn delete_customer(
    pool: &DbPool,
    customer_id: i64
) -> Result<(), CustomerServiceError> {
    run_in_transaction(pool, move |conn| -> Result<_, CustomerServiceError> {
        match db_interaction::delete_customer(conn, customer_id)? {
            0 => Err(not_found_by_id(customer_id)),
            _ => {
                tracing::info!(customer_id, "Deleted customer and their bookings");
                Ok(())
            }
        }
    })
    .await
}

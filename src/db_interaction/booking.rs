use diesel::{ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, QueryResult, RunQueryDsl};

use crate::{models::{Booking, NewBooking}, schema::bookings};

#[tracing::instrument(
    "Getting bookings from db",
    skip_all
)]
pub fn get_bookings(
    conn: &mut PgConnection
) -> QueryResult<Vec<Booking>>{
    bookings::table
        .order(bookings::id.asc())
        .load::<Booking>(conn)
}

#[tracing::instrument(
    "Getting booking by id",
    skip(conn)
)]
pub fn get_booking_by_id(
    conn: &mut PgConnection,
    booking_id: i64
) -> QueryResult<Option<Booking>>{
    bookings::table
        .find(booking_id)
        .first::<Booking>(conn)
        .optional()
}

#[tracing::instrument(
    "Getting bookings of customer",
    skip(conn)
)]
pub fn get_bookings_by_customer(
    conn: &mut PgConnection,
    customer_id: i64
) -> QueryResult<Vec<Booking>>{
    bookings::table
        .filter(bookings::customer_id.eq(customer_id))
        .order(bookings::id.asc())
        .load::<Booking>(conn)
}

#[tracing::instrument(
    "Inserting booking into db",
    skip_all
)]
pub fn insert_booking(
    conn: &mut PgConnection,
    new_booking: &NewBooking
) -> QueryResult<Booking>{
    diesel::insert_into(bookings::table)
        .values(new_booking)
        .get_result::<Booking>(conn)
}

#[tracing::instrument(
    "Updating booking in db",
    skip(conn, changes)
)]
pub fn update_booking(
    conn: &mut PgConnection,
    booking_id: i64,
    changes: &NewBooking
) -> QueryResult<Option<Booking>>{
    diesel::update(bookings::table.find(booking_id))
        .set(changes)
        .get_result::<Booking>(conn)
        .optional()
}

#[tracing::instrument(
    "Deleting booking from db",
    skip(conn)
)]
pub fn delete_booking(
    conn: &mut PgConnection,
    booking_id: i64
) -> QueryResult<usize>{
    diesel::delete(bookings::table.find(booking_id))
        .execute(conn)
}

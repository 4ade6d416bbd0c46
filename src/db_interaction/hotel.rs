use diesel::dsl::exists;
use diesel::{ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, QueryResult, RunQueryDsl};

use crate::{models::{Hotel, NewHotel}, schema::hotels};

#[tracing::instrument(
    "Getting hotels from db",
    skip(conn)
)]
pub fn get_hotels(
    conn: &mut PgConnection,
    name: Option<&str>
) -> QueryResult<Vec<Hotel>>{
    let mut query = hotels::table.into_boxed();

    if let Some(name) = name {
        query = query.filter(hotels::name.eq(name));
    }

    query
        .order((hotels::name.asc(), hotels::id.asc()))
        .load::<Hotel>(conn)
}

#[tracing::instrument(
    "Getting hotel by id",
    skip(conn)
)]
pub fn get_hotel_by_id(
    conn: &mut PgConnection,
    hotel_id: i64
) -> QueryResult<Option<Hotel>>{
    hotels::table
        .find(hotel_id)
        .first::<Hotel>(conn)
        .optional()
}

#[tracing::instrument(
    "Getting hotel by phone number",
    skip(conn)
)]
pub fn get_hotel_by_phone(
    conn: &mut PgConnection,
    phone_number: &str
) -> QueryResult<Option<Hotel>>{
    hotels::table
        .filter(hotels::phone_number.eq(phone_number))
        .first::<Hotel>(conn)
        .optional()
}

#[tracing::instrument(
    "Getting hotels by postal code",
    skip(conn)
)]
pub fn get_hotels_by_postal_code(
    conn: &mut PgConnection,
    postal_code: &str
) -> QueryResult<Vec<Hotel>>{
    hotels::table
        .filter(hotels::postal_code.eq(postal_code))
        .order(hotels::id.asc())
        .load::<Hotel>(conn)
}

#[tracing::instrument(
    "Getting hotels by location",
    skip(conn)
)]
pub fn get_hotels_by_location(
    conn: &mut PgConnection,
    location: &str
) -> QueryResult<Vec<Hotel>>{
    hotels::table
        .filter(hotels::location.eq(location))
        .order(hotels::id.asc())
        .load::<Hotel>(conn)
}

#[tracing::instrument(
    "Checking hotel exists in db",
    skip(conn)
)]
pub fn hotel_exists(
    conn: &mut PgConnection,
    hotel_id: i64
) -> QueryResult<bool>{
    diesel::select(exists(hotels::table.find(hotel_id)))
        .get_result::<bool>(conn)
}

#[tracing::instrument(
    "Inserting hotel into db",
    skip_all
)]
pub fn insert_hotel(
    conn: &mut PgConnection,
    new_hotel: &NewHotel
) -> QueryResult<Hotel>{
    diesel::insert_into(hotels::table)
        .values(new_hotel)
        .get_result::<Hotel>(conn)
}

#[tracing::instrument(
    "Updating hotel in db",
    skip(conn, changes)
)]
pub fn update_hotel(
    conn: &mut PgConnection,
    hotel_id: i64,
    changes: &NewHotel
) -> QueryResult<Option<Hotel>>{
    diesel::update(hotels::table.find(hotel_id))
        .set(changes)
        .get_result::<Hotel>(conn)
        .optional()
}

#[tracing::instrument(
    "Deleting hotel from db",
    skip(conn)
)]
pub fn delete_hotel(
    conn: &mut PgConnection,
    hotel_id: i64
) -> QueryResult<usize>{
    diesel::delete(hotels::table.find(hotel_id))
        .execute(conn)
}

use diesel::dsl::exists;
use diesel::{ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, QueryResult, RunQueryDsl};

use crate::{models::{Customer, NewCustomer}, schema::customers};

#[tracing::instrument(
    "Getting customers from db",
    skip(conn)
)]
pub fn get_customers(
    conn: &mut PgConnection,
    name: Option<&str>
) -> QueryResult<Vec<Customer>>{
    let mut query = customers::table.into_boxed();

    if let Some(name) = name {
        query = query.filter(customers::name.eq(name));
    }

    query
        .order((customers::name.asc(), customers::id.asc()))
        .load::<Customer>(conn)
}

#[tracing::instrument(
    "Getting customer by id",
    skip(conn)
)]
pub fn get_customer_by_id(
    conn: &mut PgConnection,
    customer_id: i64
) -> QueryResult<Option<Customer>>{
    customers::table
        .find(customer_id)
        .first::<Customer>(conn)
        .optional()
}

#[tracing::instrument(
    "Getting customer by email",
    skip(conn)
)]
pub fn get_customer_by_email(
    conn: &mut PgConnection,
    email: &str
) -> QueryResult<Option<Customer>>{
    customers::table
        .filter(customers::email.eq(email))
        .first::<Customer>(conn)
        .optional()
}

#[tracing::instrument(
    "Getting customer by phone number",
    skip(conn)
)]
pub fn get_customer_by_phone(
    conn: &mut PgConnection,
    phone_number: &str
) -> QueryResult<Option<Customer>>{
    customers::table
        .filter(customers::phone_number.eq(phone_number))
        .first::<Customer>(conn)
        .optional()
}

#[tracing::instrument(
    "Checking customer exists in db",
    skip(conn)
)]
pub fn customer_exists(
    conn: &mut PgConnection,
    customer_id: i64
) -> QueryResult<bool>{
    diesel::select(exists(customers::table.find(customer_id)))
        .get_result::<bool>(conn)
}

#[tracing::instrument(
    "Inserting customer into db",
    skip_all
)]
pub fn insert_customer(
    conn: &mut PgConnection,
    new_customer: &NewCustomer
) -> QueryResult<Customer>{
    diesel::insert_into(customers::table)
        .values(new_customer)
        .get_result::<Customer>(conn)
}

// None when no customer has the given id
#[tracing::instrument(
    "Updating customer in db",
    skip(conn, changes)
)]
pub fn update_customer(
    conn: &mut PgConnection,
    customer_id: i64,
    changes: &NewCustomer
) -> QueryResult<Option<Customer>>{
    diesel::update(customers::table.find(customer_id))
        .set(changes)
        .get_result::<Customer>(conn)
        .optional()
}

// Bookings of the customer go with it (ON DELETE CASCADE)
#[tracing::instrument(
    "Deleting customer from db",
    skip(conn)
)]
pub fn delete_customer(
    conn: &mut PgConnection,
    customer_id: i64
) -> QueryResult<usize>{
    diesel::delete(customers::table.find(customer_id))
        .execute(conn)
}

use chrono::NaiveDate;
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};

use crate::schema::{bookings, customers, hotels};

#[derive(Queryable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = customers)]
pub struct Customer{
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String
}

// Validated customer fields, see domain::customer
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = customers)]
pub struct NewCustomer{
    pub name: String,
    pub email: String,
    pub phone_number: String
}

#[derive(Queryable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = hotels)]
pub struct Hotel{
    pub id: i64,
    pub name: String,
    pub location: String,
    pub phone_number: String,
    pub postal_code: String
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = hotels)]
pub struct NewHotel{
    pub name: String,
    pub location: String,
    pub phone_number: String,
    pub postal_code: String
}

#[derive(Queryable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = bookings)]
pub struct Booking{
    pub id: i64,
    pub customer_id: i64,
    pub hotel_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = bookings)]
pub struct NewBooking{
    pub customer_id: i64,
    pub hotel_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate
}

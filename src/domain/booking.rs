use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::NewBooking;

use super::CustomerPayload;

// All fields are required, missing ones are rejected while deserializing
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BookingPayload{
    #[serde(default)]
    pub id: Option<i64>,
    pub customer_id: i64,
    pub hotel_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate
}

impl From<BookingPayload> for NewBooking {
    fn from(payload: BookingPayload) -> Self {
        NewBooking{
            customer_id: payload.customer_id,
            hotel_id: payload.hotel_id,
            check_in_date: payload.check_in_date,
            check_out_date: payload.check_out_date
        }
    }
}

// Booking half of a guest booking, the customer does not exist yet
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GuestBookingDetails{
    pub hotel_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate
}

impl GuestBookingDetails {
    pub fn for_customer(self, customer_id: i64) -> NewBooking {
        NewBooking{
            customer_id,
            hotel_id: self.hotel_id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GuestBookingPayload{
    pub customer: CustomerPayload,
    pub booking: GuestBookingDetails
}

mod booking;
mod customer;
mod customer_email;
mod customer_name;
mod hotel;
mod hotel_name;
mod phone_number;
mod postal_code;
mod validation;

pub use booking::{BookingPayload, GuestBookingDetails, GuestBookingPayload};
pub use customer::CustomerPayload;
pub use customer_email::CustomerEmail;
pub use customer_name::CustomerName;
pub use hotel::HotelPayload;
pub use hotel_name::{HotelLocation, HotelName};
pub use phone_number::{CustomerPhoneNumber, HotelPhoneNumber};
pub use postal_code::PostalCode;
pub use validation::ValidationErrors;

mod bookings;
mod customers;
mod error;
mod guest_bookings;
mod health_check;
mod hotels;

pub use bookings::*;
pub use customers::*;
pub use error::{json_error_handler, ErrorBody};
pub use guest_bookings::*;
pub use health_check::*;
pub use hotels::*;

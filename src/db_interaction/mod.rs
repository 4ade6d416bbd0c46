mod booking;
mod customer;
mod hotel;

pub use booking::*;
pub use customer::*;
pub use hotel::*;

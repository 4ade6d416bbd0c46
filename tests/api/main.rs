mod constraints;
mod health_check;
mod helpers;
mod hotels;

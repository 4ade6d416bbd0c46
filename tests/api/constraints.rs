use chrono::NaiveDate;
use hotel_booking::{
    db_interaction,
    models::{NewBooking, NewCustomer, NewHotel},
    service::{BookingServiceError, CustomerServiceError, HotelServiceError}
};

use crate::helpers::{customer_json, TestApp};

fn new_customer(email: &str, phone_number: &str) -> NewCustomer {
    NewCustomer {
        name: "Jane".to_string(),
        email: email.to_string(),
        phone_number: phone_number.to_string()
    }
}

fn new_hotel(phone_number: &str) -> NewHotel {
    NewHotel {
        name: "Grand Hotel".to_string(),
        location: "Newcastle".to_string(),
        phone_number: phone_number.to_string(),
        postal_code: "NE17RU".to_string()
    }
}

fn new_booking(customer_id: i64, hotel_id: i64) -> NewBooking {
    NewBooking {
        customer_id,
        hotel_id,
        check_in_date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
        check_out_date: NaiveDate::from_ymd_opt(2024, 11, 4).unwrap()
    }
}

#[actix_web::test]
async fn customer_unique_violations_map_to_conflicts(){
    let app = TestApp::spawn_app().await;
    let mut conn = app.pool.get().unwrap();

    db_interaction::insert_customer(&mut conn, &new_customer("jane@example.com", "07123456789"))
        .expect("Failed to insert first customer");

    let error = db_interaction::insert_customer(&mut conn, &new_customer("jane@example.com", "07000000000"))
        .expect_err("Duplicate email should be rejected");
    assert!(matches!(CustomerServiceError::from(error), CustomerServiceError::EmailNotUnique));

    let error = db_interaction::insert_customer(&mut conn, &new_customer("other@example.com", "07123456789"))
        .expect_err("Duplicate phone number should be rejected");
    assert!(matches!(CustomerServiceError::from(error), CustomerServiceError::PhoneNotUnique));
}

#[actix_web::test]
async fn hotel_unique_violation_maps_to_conflict(){
    let app = TestApp::spawn_app().await;
    let mut conn = app.pool.get().unwrap();

    db_interaction::insert_hotel(&mut conn, &new_hotel("01912345678"))
        .expect("Failed to insert first hotel");

    let error = db_interaction::insert_hotel(&mut conn, &new_hotel("01912345678"))
        .expect_err("Duplicate phone number should be rejected");
    assert!(matches!(HotelServiceError::from(error), HotelServiceError::PhoneNotUnique));
}

#[actix_web::test]
async fn booking_foreign_key_violations_map_to_missing_references(){
    let app = TestApp::spawn_app().await;
    let mut conn = app.pool.get().unwrap();

    let customer = db_interaction::insert_customer(&mut conn, &new_customer("jane@example.com", "07123456789"))
        .expect("Failed to insert customer");
    let hotel = db_interaction::insert_hotel(&mut conn, &new_hotel("01912345678"))
        .expect("Failed to insert hotel");

    let error = db_interaction::insert_booking(&mut conn, &new_booking(customer.id + 100, hotel.id))
        .expect_err("Unknown customer should be rejected");
    assert!(matches!(BookingServiceError::from(error), BookingServiceError::CustomerNotExist));

    let error = db_interaction::insert_booking(&mut conn, &new_booking(customer.id, hotel.id + 100))
        .expect_err("Unknown hotel should be rejected");
    assert!(matches!(BookingServiceError::from(error), BookingServiceError::HotelNotExist));
}

#[actix_web::test]
async fn concurrent_identical_customers_create_exactly_one(){
    let app = TestApp::spawn_app().await;
    let url = format!("{}/customers", app.get_app_url());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = app.api_client.clone();
            let url = url.clone();
            tokio::spawn(async move {
                client.post(url)
                    .json(&customer_json())
                    .send()
                    .await
                    .expect("Failed to execute request")
                    .status()
                    .as_u16()
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.expect("Request task panicked"));
    }

    assert_eq!(statuses.iter().filter(|s| **s == 201).count(), 1, "statuses: {:?}", statuses);
    assert!(statuses.iter().all(|s| *s == 201 || *s == 409), "statuses: {:?}", statuses);
    assert_eq!(app.count_rows("customers"), 1);
}

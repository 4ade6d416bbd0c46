use serde_json::{json, Value};

use crate::helpers::{hotel_json, other_hotel_json, TestApp};

#[actix_web::test]
async fn post_hotel_returns_201(){
    let app = TestApp::spawn_app().await;

    let response = app.post("/hotels", &hotel_json()).await;
    assert_eq!(response.status().as_u16(), 201);

    let created: Value = response.json().await.unwrap();
    assert_eq!(created["postal_code"], "NE17RU");
    assert_eq!(app.count_rows("hotels"), 1);
}

#[actix_web::test]
async fn invalid_hotel_returns_400_with_reasons(){
    let app = TestApp::spawn_app().await;

    let mut body = hotel_json();
    body["phone_number"] = json!("11912345678");
    body["postal_code"] = json!("NE1 7R");

    let response = app.post("/hotels", &body).await;
    assert_eq!(response.status().as_u16(), 400);

    let error: Value = response.json().await.unwrap();
    let reasons = error["reasons"].as_object().unwrap();
    assert_eq!(reasons.len(), 2);
    assert!(reasons.contains_key("phone_number"));
    assert!(reasons.contains_key("postal_code"));
}

#[actix_web::test]
async fn duplicate_hotel_phone_returns_409(){
    let app = TestApp::spawn_app().await;
    app.create_hotel(&hotel_json()).await;

    let mut body = other_hotel_json();
    body["phone_number"] = hotel_json()["phone_number"].clone();

    let response = app.post("/hotels", &body).await;
    assert_eq!(response.status().as_u16(), 409);
}

#[actix_web::test]
async fn hotels_can_be_looked_up(){
    let app = TestApp::spawn_app().await;
    let id = app.create_hotel(&hotel_json()).await;
    app.create_hotel(&other_hotel_json()).await;

    let hotel: Value = app.get(&format!("/hotels/{}", id)).await.json().await.unwrap();
    assert_eq!(hotel["name"], "Grand Hotel");

    let hotel: Value = app.get("/hotels/phone/01912345678").await.json().await.unwrap();
    assert_eq!(hotel["id"], id);

    let by_postal_code: Vec<Value> = app.get("/hotels/postal-code/NE17RU").await.json().await.unwrap();
    assert_eq!(by_postal_code.len(), 1);

    let by_location: Vec<Value> = app.get("/hotels/location/Newcastle").await.json().await.unwrap();
    assert_eq!(by_location.len(), 2);

    let by_name: Vec<Value> = app.get("/hotels?name=Quayside%20Inn").await.json().await.unwrap();
    assert_eq!(by_name.len(), 1);
}

#[actix_web::test]
async fn list_lookups_without_matches_are_empty(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/hotels/postal-code/ZZ99ZZ").await;
    assert_eq!(response.status().as_u16(), 200);
    let hotels: Vec<Value> = response.json().await.unwrap();
    assert!(hotels.is_empty());

    let response = app.get("/hotels/phone/01900000000").await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn put_hotel_updates_and_checks_phone_of_others(){
    let app = TestApp::spawn_app().await;
    let id = app.create_hotel(&hotel_json()).await;
    let other_id = app.create_hotel(&other_hotel_json()).await;

    let mut changes = hotel_json();
    changes["location"] = json!("Gateshead");
    let response = app.put(&format!("/hotels/{}", id), &changes).await;
    assert_eq!(response.status().as_u16(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["location"], "Gateshead");

    let mut taken = other_hotel_json();
    taken["phone_number"] = hotel_json()["phone_number"].clone();
    let response = app.put(&format!("/hotels/{}", other_id), &taken).await;
    assert_eq!(response.status().as_u16(), 409);
}

#[actix_web::test]
async fn delete_hotel_returns_204_then_404(){
    let app = TestApp::spawn_app().await;
    let id = app.create_hotel(&hotel_json()).await;

    let response = app.delete(&format!("/hotels/{}", id)).await;
    assert_eq!(response.status().as_u16(), 204);

    let response = app.get(&format!("/hotels/{}", id)).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn put_hotel_with_invalid_body_returns_400(){
    let app = TestApp::spawn_app().await;
    let id = app.create_hotel(&hotel_json()).await;

    let mut changes = hotel_json();
    changes["name"] = json!("");

    let response = app.put(&format!("/hotels/{}", id), &changes).await;
    assert_eq!(response.status().as_u16(), 400);

    let error: Value = response.json().await.unwrap();
    assert!(error["reasons"]["name"].is_string());
}

#[actix_web::test]
async fn put_hotel_with_mismatched_id_returns_409(){
    let app = TestApp::spawn_app().await;
    let id = app.create_hotel(&hotel_json()).await;

    let mut changes = hotel_json();
    changes["id"] = json!(id + 1);

    let response = app.put(&format!("/hotels/{}", id), &changes).await;
    assert_eq!(response.status().as_u16(), 409);

    let error: Value = response.json().await.unwrap();
    assert!(error["reasons"]["id"].is_string());
}

#[actix_web::test]
async fn put_unknown_hotel_returns_404(){
    let app = TestApp::spawn_app().await;

    let response = app.put("/hotels/42", &hotel_json()).await;
    assert_eq!(response.status().as_u16(), 404);
}

// Catalog, wishlist, and booking flows against a wired application

mod common;

use showroom_backend::stores::{
    BookingInput, CarFilter, CarInput, ServiceRequestInput, TradeInInput,
};

fn car(name: &str, brand: &str, price: i64, featured: bool) -> CarInput {
    CarInput {
        name: name.to_string(),
        brand: brand.to_string(),
        category: "sedan".to_string(),
        price,
        year: 2022,
        mileage: 15_000,
        fuel_type: "petrol".to_string(),
        transmission: "automatic".to_string(),
        description: None,
        image_url: None,
        featured,
        status: "available".to_string(),
    }
}

#[tokio::test]
async fn car_filters_combine_with_and() {
    let app_data = common::setup().await;

    app_data
        .car_store
        .create(car("Corolla", "Toyota", 25_000, true))
        .await
        .unwrap();
    app_data
        .car_store
        .create(car("Camry", "Toyota", 35_000, false))
        .await
        .unwrap();
    app_data
        .car_store
        .create(car("Civic", "Honda", 28_000, true))
        .await
        .unwrap();

    let filter = CarFilter {
        brand: Some("Toyota".to_string()),
        max_price: Some(30_000),
        ..Default::default()
    };
    let cars = app_data.car_store.list(&filter, 50, 0).await.unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].name, "Corolla");

    let featured = CarFilter {
        featured: Some(true),
        ..Default::default()
    };
    assert_eq!(app_data.car_store.count(&featured).await.unwrap(), 2);

    let search = CarFilter {
        search: Some("Ci".to_string()),
        ..Default::default()
    };
    let cars = app_data.car_store.list(&search, 50, 0).await.unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].name, "Civic");
}

#[tokio::test]
async fn wishlist_drops_cars_deleted_from_inventory() {
    let app_data = common::setup().await;
    let user_id = common::register_user(&app_data, "buyer@example.com", "hunter2hunter2").await;

    let kept = app_data
        .car_store
        .create(car("Corolla", "Toyota", 25_000, false))
        .await
        .unwrap();
    let doomed = app_data
        .car_store
        .create(car("Civic", "Honda", 28_000, false))
        .await
        .unwrap();

    app_data.favorite_store.add(&user_id, &kept.id).await.unwrap();
    app_data
        .favorite_store
        .add(&user_id, &doomed.id)
        .await
        .unwrap();

    app_data.car_store.delete(&doomed.id).await.unwrap();

    let wishlist = app_data.favorite_store.list_for_user(&user_id).await.unwrap();
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist[0].id, kept.id);
}

#[tokio::test]
async fn booking_triage_walks_the_status_ladder() {
    let app_data = common::setup().await;

    let booking = app_data
        .booking_store
        .create_booking(BookingInput {
            user_id: None,
            car_name: "Corolla".to_string(),
            customer_name: "Sam Buyer".to_string(),
            customer_email: "sam@example.com".to_string(),
            customer_phone: "555-0100".to_string(),
            preferred_date: "2026-09-15".to_string(),
            preferred_time: "10:00".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(booking.status, "pending");

    let confirmed = app_data
        .booking_store
        .set_booking_status(&booking.id, "confirmed")
        .await
        .unwrap();
    assert_eq!(confirmed.status, "confirmed");

    // Unknown status values are rejected without touching the row
    assert!(app_data
        .booking_store
        .set_booking_status(&booking.id, "teleported")
        .await
        .is_err());
    let unchanged = app_data
        .booking_store
        .list_bookings(Some("confirmed"), 10, 0)
        .await
        .unwrap();
    assert_eq!(unchanged.len(), 1);
}

#[tokio::test]
async fn trade_in_requests_start_pending_and_filter_by_status() {
    let app_data = common::setup().await;

    let request = app_data
        .booking_store
        .create_trade_in(TradeInInput {
            user_id: None,
            vehicle_make: "Mazda".to_string(),
            vehicle_model: "3".to_string(),
            vehicle_year: 2018,
            mileage: 80_000,
            condition: "good".to_string(),
            customer_name: "Sam Buyer".to_string(),
            customer_email: "sam@example.com".to_string(),
            customer_phone: None,
        })
        .await
        .unwrap();
    assert_eq!(request.status, "pending");

    app_data
        .booking_store
        .set_trade_in_status(&request.id, "offered")
        .await
        .unwrap();

    let pending = app_data
        .booking_store
        .list_trade_ins(Some("pending"), 10, 0)
        .await
        .unwrap();
    assert!(pending.is_empty());
    let offered = app_data
        .booking_store
        .list_trade_ins(Some("offered"), 10, 0)
        .await
        .unwrap();
    assert_eq!(offered.len(), 1);
}

#[tokio::test]
async fn service_requests_start_pending_and_are_triageable() {
    let app_data = common::setup().await;

    let request = app_data
        .booking_store
        .create_service_request(ServiceRequestInput {
            user_id: None,
            name: "Sam Buyer".to_string(),
            email: "sam@example.com".to_string(),
            phone: "555-0100".to_string(),
            service_type: "Periodic Maintenance".to_string(),
            vehicle_details: Some("2019 Mazda 3".to_string()),
            preferred_date: Some("2026-09-20".to_string()),
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(request.status, "pending");

    let confirmed = app_data
        .booking_store
        .set_service_request_status(&request.id, "confirmed")
        .await
        .unwrap();
    assert_eq!(confirmed.status, "confirmed");

    // Unknown status values are rejected without touching the row
    assert!(app_data
        .booking_store
        .set_service_request_status(&request.id, "escalated")
        .await
        .is_err());

    let pending = app_data
        .booking_store
        .list_service_requests(Some("pending"), 10, 0)
        .await
        .unwrap();
    assert!(pending.is_empty());
    let confirmed = app_data
        .booking_store
        .list_service_requests(Some("confirmed"), 10, 0)
        .await
        .unwrap();
    assert_eq!(confirmed.len(), 1);
}

#[tokio::test]
async fn inquiries_and_contact_messages_are_triageable() {
    let app_data = common::setup().await;

    let inquiry = app_data
        .inquiry_store
        .create_inquiry(
            None,
            "Sam Buyer".to_string(),
            "sam@example.com".to_string(),
            None,
            "Is the Corolla still available?".to_string(),
            "purchase".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(inquiry.status, "new");

    app_data
        .inquiry_store
        .set_inquiry_status(&inquiry.id, "resolved")
        .await
        .unwrap();
    let open = app_data
        .inquiry_store
        .list_inquiries(Some("new"), 10, 0)
        .await
        .unwrap();
    assert!(open.is_empty());

    // Unknown inquiry kinds are rejected at creation
    assert!(app_data
        .inquiry_store
        .create_inquiry(
            None,
            "Sam Buyer".to_string(),
            "sam@example.com".to_string(),
            None,
            "hello".to_string(),
            "complaint".to_string(),
        )
        .await
        .is_err());

    let message = app_data
        .inquiry_store
        .create_message(
            "Sam Buyer".to_string(),
            "sam@example.com".to_string(),
            "Opening hours".to_string(),
            "Are you open on Sundays?".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(message.status, "unread");

    let read = app_data
        .inquiry_store
        .set_message_status(&message.id, "read")
        .await
        .unwrap();
    assert_eq!(read.status, "read");
}

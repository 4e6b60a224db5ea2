//! REST API test macro for storage backends.
//!
//! The `cafe_api_tests!` macro generates HTTP-level tests that run the whole
//! application (envelope, validation, services, storage) through
//! `axum_test::TestServer`.

/// Generate the REST API suite for a storage backend.
///
/// `$builder_factory` must produce a [`ServerBuilder`](cafe::server::ServerBuilder)
/// with both stores set. It is re-evaluated for each test.
///
/// # Generated Tests
///
/// ## Auxiliary routes
/// - `test_root_is_plaintext_banner`, `test_health_reports_ok`
/// - `test_unknown_route_is_enveloped_not_found`
///
/// ## Menu items
/// - create with defaults, required fields, round-trip, partial update,
///   delete, not-found on every id route, newest-first listing
///
/// ## Orders
/// - computed total, client total ignored, required fields, overflowing
///   total, status-only update, invalid status, replacement items validated,
///   null note clears it, delete, menu deletion leaves orders intact
///
/// ## Request errors
/// - malformed JSON and wrong field types answer `VALIDATION_ERROR`
#[macro_export]
macro_rules! cafe_api_tests {
    ($builder_factory:expr) => {
        mod cafe_api_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};
            use std::time::Duration;

            async fn make_server() -> TestServer {
                let builder: cafe::server::ServerBuilder = $builder_factory;
                let router = builder.build().unwrap();
                TestServer::try_new(router).unwrap()
            }

            async fn create_menu_item(server: &TestServer, name: &str, price: f64) -> Value {
                let response = server
                    .post("/api/menu-items")
                    .json(&menu_item_body(name, price))
                    .await;
                response.assert_status(StatusCode::CREATED);
                response.json::<Value>()["data"].clone()
            }

            async fn create_order(server: &TestServer, body: Value) -> Value {
                let response = server.post("/api/orders").json(&body).await;
                response.assert_status(StatusCode::CREATED);
                response.json::<Value>()["data"].clone()
            }

            fn assert_error(body: &Value, code: &str, message: &str) {
                assert_eq!(body["success"], false);
                assert_eq!(body["error"]["code"], code);
                assert_eq!(body["error"]["message"], message);
            }

            // ==============================================================
            // Auxiliary routes
            // ==============================================================

            #[tokio::test]
            async fn test_root_is_plaintext_banner() {
                let server = make_server().await;
                let response = server.get("/").await;

                response.assert_status_ok();
                response.assert_text("Cafe Manager API is running");
            }

            #[tokio::test]
            async fn test_health_reports_ok() {
                let server = make_server().await;
                let response = server.get("/health").await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["status"], "ok");
                let timestamp = body["timestamp"].as_str().unwrap();
                chrono::DateTime::parse_from_rfc3339(timestamp).unwrap();
            }

            #[tokio::test]
            async fn test_unknown_route_is_enveloped_not_found() {
                let server = make_server().await;
                let response = server.get("/api/customers").await;

                response.assert_status(StatusCode::NOT_FOUND);
                let body: Value = response.json();
                assert_eq!(body["success"], false);
                assert_eq!(body["error"]["code"], "NOT_FOUND");
            }

            // ==============================================================
            // Menu items
            // ==============================================================

            #[tokio::test]
            async fn test_create_menu_item_applies_defaults() {
                let server = make_server().await;
                let response = server
                    .post("/api/menu-items")
                    .json(&json!({ "name": "Latte", "price": 4.5 }))
                    .await;

                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(body["success"], true);
                assert_eq!(body["message"], "Menu item created successfully");
                assert_eq!(body["data"]["name"], "Latte");
                assert_eq!(body["data"]["price"], 4.5);
                assert_eq!(body["data"]["category"], "other");
                assert_eq!(body["data"]["isAvailable"], true);
                uuid::Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap();
                assert!(body["data"]["createdAt"].is_string());
                assert!(body["data"]["updatedAt"].is_string());
            }

            #[tokio::test]
            async fn test_create_menu_item_keeps_explicit_values() {
                let server = make_server().await;
                let response = server
                    .post("/api/menu-items")
                    .json(&json!({
                        "name": "Green tea",
                        "category": "tea",
                        "price": 2.75,
                        "isAvailable": false,
                        "description": "Sencha"
                    }))
                    .await;

                response.assert_status(StatusCode::CREATED);
                let data = &response.json::<Value>()["data"];
                assert_eq!(data["category"], "tea");
                assert_eq!(data["isAvailable"], false);
                assert_eq!(data["description"], "Sencha");
            }

            #[tokio::test]
            async fn test_create_menu_item_requires_name_and_price() {
                let server = make_server().await;

                for body in [
                    json!({ "price": 3.0 }),
                    json!({ "name": "Latte" }),
                    json!({ "name": "", "price": 3.0 }),
                    json!({ "name": "Latte", "price": 0 }),
                ] {
                    let response = server.post("/api/menu-items").json(&body).await;
                    response.assert_status(StatusCode::BAD_REQUEST);
                    assert_error(
                        &response.json::<Value>(),
                        "VALIDATION_ERROR",
                        "Name and price are required",
                    );
                }

                let list: Value = server.get("/api/menu-items").await.json();
                assert_eq!(list["data"].as_array().unwrap().len(), 0);
            }

            #[tokio::test]
            async fn test_menu_item_round_trip() {
                let server = make_server().await;
                let created = create_menu_item(&server, "Espresso", 2.2).await;
                let id = created["id"].as_str().unwrap();

                let response = server.get(&format!("/api/menu-items/{}", id)).await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["success"], true);
                assert_eq!(body["message"], "OK");
                assert_eq!(body["data"], created);
            }

            #[tokio::test]
            async fn test_update_menu_item_replaces_provided_fields() {
                let server = make_server().await;
                let created = create_menu_item(&server, "Flat white", 3.5).await;
                let id = created["id"].as_str().unwrap();

                let response = server
                    .put(&format!("/api/menu-items/{}", id))
                    .json(&json!({ "price": 3.9, "isAvailable": false }))
                    .await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["message"], "Menu item updated");
                assert_eq!(body["data"]["name"], "Flat white");
                assert_eq!(body["data"]["price"], 3.9);
                assert_eq!(body["data"]["isAvailable"], false);
                assert_eq!(body["data"]["createdAt"], created["createdAt"]);
            }

            #[tokio::test]
            async fn test_delete_menu_item() {
                let server = make_server().await;
                let created = create_menu_item(&server, "Muffin", 2.0).await;
                let url = format!("/api/menu-items/{}", created["id"].as_str().unwrap());

                let response = server.delete(&url).await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["success"], true);
                assert_eq!(body["data"], Value::Null);
                assert_eq!(body["message"], "Menu item deleted");

                let response = server.get(&url).await;
                response.assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_menu_item_not_found_on_every_id_route() {
                let server = make_server().await;
                create_menu_item(&server, "Bagel", 2.5).await;

                for id in [uuid::Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
                    let url = format!("/api/menu-items/{}", id);

                    let response = server.get(&url).await;
                    response.assert_status(StatusCode::NOT_FOUND);
                    assert_error(&response.json::<Value>(), "NOT_FOUND", "Menu item not found");

                    let response = server.put(&url).json(&json!({ "price": 9.0 })).await;
                    response.assert_status(StatusCode::NOT_FOUND);

                    let response = server.delete(&url).await;
                    response.assert_status(StatusCode::NOT_FOUND);
                }

                let list: Value = server.get("/api/menu-items").await.json();
                assert_eq!(list["data"].as_array().unwrap().len(), 1);
                assert_eq!(list["data"][0]["price"], 2.5);
            }

            #[tokio::test]
            async fn test_menu_items_listed_newest_first() {
                let server = make_server().await;
                for name in ["First", "Second", "Third"] {
                    create_menu_item(&server, name, 1.0).await;
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }

                let response = server.get("/api/menu-items").await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["message"], "OK");
                let names: Vec<&str> = body["data"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|item| item["name"].as_str().unwrap())
                    .collect();
                assert_eq!(names, vec!["Third", "Second", "First"]);
            }

            // ==============================================================
            // Orders
            // ==============================================================

            #[tokio::test]
            async fn test_create_order_computes_total() {
                let server = make_server().await;
                let latte = create_menu_item(&server, "Latte", 3.0).await;
                let cake = create_menu_item(&server, "Cake", 5.0).await;

                let response = server
                    .post("/api/orders")
                    .json(&json!({
                        "customerName": "Ann",
                        "items": [
                            { "menuItemId": latte["id"], "name": "Latte", "price": 3, "qty": 2 },
                            { "menuItemId": cake["id"], "name": "Cake", "price": 5, "qty": 1 }
                        ]
                    }))
                    .await;

                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(body["message"], "Order created successfully");
                assert_eq!(body["data"]["total"], 11.0);
                assert_eq!(body["data"]["status"], "pending");
                assert_eq!(body["data"]["customerName"], "Ann");
                assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
                assert_eq!(body["data"]["items"][0]["menuItemId"], latte["id"]);
            }

            #[tokio::test]
            async fn test_create_order_ignores_client_total_and_status() {
                let server = make_server().await;
                let mut body = order_body("Ben", &uuid::Uuid::new_v4().to_string(), 2.5, 2);
                body["total"] = json!(999);
                body["status"] = json!("done");

                let order = create_order(&server, body).await;
                assert_eq!(order["total"], 5.0);
                assert_eq!(order["status"], "pending");
            }

            #[tokio::test]
            async fn test_create_order_requires_customer_and_items() {
                let server = make_server().await;
                let item_id = uuid::Uuid::new_v4().to_string();

                let mut missing_name = order_body("x", &item_id, 1.0, 1);
                missing_name.as_object_mut().unwrap().remove("customerName");
                let empty_items = json!({ "customerName": "Cy", "items": [] });
                let missing_items = json!({ "customerName": "Cy" });

                for body in [missing_name, empty_items, missing_items] {
                    let response = server.post("/api/orders").json(&body).await;
                    response.assert_status(StatusCode::BAD_REQUEST);
                    assert_error(
                        &response.json::<Value>(),
                        "VALIDATION_ERROR",
                        "Customer name and items are required",
                    );
                }

                let list: Value = server.get("/api/orders").await.json();
                assert_eq!(list["data"].as_array().unwrap().len(), 0);
            }

            #[tokio::test]
            async fn test_create_order_rejects_zero_quantity() {
                let server = make_server().await;
                let body = order_body("Dee", &uuid::Uuid::new_v4().to_string(), 3.0, 0);

                let response = server.post("/api/orders").json(&body).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(response.json::<Value>()["error"]["code"], "VALIDATION_ERROR");
            }

            #[tokio::test]
            async fn test_status_update_keeps_total_and_items() {
                let server = make_server().await;
                let order = create_order(
                    &server,
                    order_body("Eve", &uuid::Uuid::new_v4().to_string(), 3.0, 2),
                )
                .await;
                let url = format!("/api/orders/{}", order["id"].as_str().unwrap());

                let response = server.put(&url).json(&json!({ "status": "making" })).await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["message"], "Order updated");
                assert_eq!(body["data"]["status"], "making");
                assert_eq!(body["data"]["total"], order["total"]);
                assert_eq!(body["data"]["items"], order["items"]);

                let fetched: Value = server.get(&url).await.json();
                assert_eq!(fetched["data"]["status"], "making");
            }

            #[tokio::test]
            async fn test_update_order_rejects_unknown_status() {
                let server = make_server().await;
                let order = create_order(
                    &server,
                    order_body("Fay", &uuid::Uuid::new_v4().to_string(), 1.0, 1),
                )
                .await;
                let url = format!("/api/orders/{}", order["id"].as_str().unwrap());

                let response = server.put(&url).json(&json!({ "status": "shipped" })).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(response.json::<Value>()["error"]["code"], "VALIDATION_ERROR");

                let fetched: Value = server.get(&url).await.json();
                assert_eq!(fetched["data"]["status"], "pending");
            }

            #[tokio::test]
            async fn test_items_update_is_validated_like_create() {
                let server = make_server().await;
                let menu_item_id = uuid::Uuid::new_v4().to_string();
                let order = create_order(&server, order_body("Kit", &menu_item_id, 2.0, 1)).await;
                let url = format!("/api/orders/{}", order["id"].as_str().unwrap());

                for items in [
                    json!([]),
                    json!([{ "menuItemId": menu_item_id, "name": "Latte", "price": 2.0, "qty": 0 }]),
                ] {
                    let response = server.put(&url).json(&json!({ "items": items })).await;
                    response.assert_status(StatusCode::BAD_REQUEST);
                    assert_eq!(response.json::<Value>()["error"]["message"], "Invalid order update");
                }

                let fetched: Value = server.get(&url).await.json();
                assert_eq!(fetched["data"], order);
            }

            #[tokio::test]
            async fn test_create_order_rejects_overflowing_total() {
                let server = make_server().await;
                let body = order_body("Lou", &uuid::Uuid::new_v4().to_string(), 1e308, 10);

                let response = server.post("/api/orders").json(&body).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(response.json::<Value>()["error"]["code"], "VALIDATION_ERROR");

                let list = server.get("/api/orders").await;
                list.assert_status_ok();
                assert_eq!(list.json::<Value>()["data"].as_array().unwrap().len(), 0);
            }

            #[tokio::test]
            async fn test_null_note_clears_it() {
                let server = make_server().await;
                let mut body = order_body("Max", &uuid::Uuid::new_v4().to_string(), 1.0, 1);
                body["note"] = json!("extra hot");
                let order = create_order(&server, body).await;
                assert_eq!(order["note"], "extra hot");
                let url = format!("/api/orders/{}", order["id"].as_str().unwrap());

                let response = server.put(&url).json(&json!({ "note": null })).await;
                response.assert_status_ok();

                let fetched: Value = server.get(&url).await.json();
                assert!(fetched["data"].get("note").is_none());
                assert_eq!(fetched["data"]["customerName"], "Max");
            }

            #[tokio::test]
            async fn test_delete_order() {
                let server = make_server().await;
                let order = create_order(
                    &server,
                    order_body("Gus", &uuid::Uuid::new_v4().to_string(), 1.0, 1),
                )
                .await;
                let url = format!("/api/orders/{}", order["id"].as_str().unwrap());

                let response = server.delete(&url).await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["data"], Value::Null);
                assert_eq!(body["message"], "Order deleted");

                let response = server.get(&url).await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_error(&response.json::<Value>(), "NOT_FOUND", "Order not found");

                server.delete(&url).await.assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_orders_listed_newest_first() {
                let server = make_server().await;
                for customer in ["Hal", "Ida"] {
                    create_order(
                        &server,
                        order_body(customer, &uuid::Uuid::new_v4().to_string(), 1.0, 1),
                    )
                    .await;
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }

                let body: Value = server.get("/api/orders").await.json();
                let customers: Vec<&str> = body["data"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|order| order["customerName"].as_str().unwrap())
                    .collect();
                assert_eq!(customers, vec!["Ida", "Hal"]);
            }

            #[tokio::test]
            async fn test_deleting_menu_item_leaves_orders_untouched() {
                let server = make_server().await;
                let latte = create_menu_item(&server, "Latte", 3.0).await;
                let latte_id = latte["id"].as_str().unwrap();
                let order = create_order(&server, order_body("Jo", latte_id, 3.0, 2)).await;

                server
                    .delete(&format!("/api/menu-items/{}", latte_id))
                    .await
                    .assert_status_ok();

                let fetched: Value = server
                    .get(&format!("/api/orders/{}", order["id"].as_str().unwrap()))
                    .await
                    .json();
                assert_eq!(fetched["data"], order);
                assert_eq!(fetched["data"]["items"][0]["menuItemId"], latte_id);
            }

            // ==============================================================
            // Request errors
            // ==============================================================

            #[tokio::test]
            async fn test_malformed_json_is_validation_error() {
                let server = make_server().await;
                let response = server
                    .post("/api/menu-items")
                    .text("{\"name\": \"Latte\",")
                    .content_type("application/json")
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["success"], false);
                assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            }

            #[tokio::test]
            async fn test_unknown_category_is_validation_error() {
                let server = make_server().await;
                let response = server
                    .post("/api/menu-items")
                    .json(&json!({ "name": "Soup", "price": 6.0, "category": "food" }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(response.json::<Value>()["error"]["code"], "VALIDATION_ERROR");
            }
        }
    };
}

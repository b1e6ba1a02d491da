#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use platform::query::ListQuery;

    use crate::application::*;
    use crate::domain::repository::OrderRepository;
    use crate::error::OrderError;
    use crate::infra::memory::InMemoryOrderRepository;

    fn input(product: &str, quantity: i64, price: f64) -> OrderInput {
        OrderInput {
            product: product.to_string(),
            quantity,
            price,
        }
    }

    async fn seeded(items: &[(&str, i64, f64)]) -> Arc<InMemoryOrderRepository> {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let create = CreateOrderUseCase::new(repo.clone());
        for &(product, quantity, price) in items {
            create.execute(input(product, quantity, price)).await.unwrap();
        }
        repo
    }

    fn query(sort: Option<&str>, search: Option<&str>) -> ListQuery {
        ListQuery {
            sort: sort.map(str::to_string),
            search: search.map(str::to_string),
            ..Default::default()
        }
    }

    fn products(page: &platform::query::PageResult<crate::domain::OrderView>) -> Vec<&str> {
        page.data.iter().map(|o| o.product.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_validates() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let create = CreateOrderUseCase::new(repo.clone());

        let order = create.execute(input(" Widget ", 3, 9.99)).await.unwrap();
        assert_eq!(order.product.as_str(), "Widget");

        for bad in [input("", 1, 1.0), input("Widget", -1, 1.0), input("Widget", 1, -0.5)] {
            assert!(matches!(
                create.execute(bad).await,
                Err(OrderError::Validation(_))
            ));
        }
        assert_eq!(repo.fetch_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_defaults_to_product_ascending() {
        let repo = seeded(&[("cherry", 1, 3.0), ("Apple", 2, 1.0), ("banana", 3, 2.0)]).await;
        let page = ListOrdersUseCase::new(repo)
            .execute(&ListQuery::default())
            .await
            .unwrap();

        assert_eq!(products(&page), ["Apple", "banana", "cherry"]);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.page_number, 1);
    }

    #[tokio::test]
    async fn test_list_sort_desc_and_numeric_fields_sort_as_text() {
        let repo = seeded(&[("a", 9, 1.0), ("b", 10, 1.0), ("c", 2, 1.0)]).await;
        let use_case = ListOrdersUseCase::new(repo);

        let page = use_case
            .execute(&query(Some("product:DESC"), None))
            .await
            .unwrap();
        assert_eq!(products(&page), ["c", "b", "a"]);

        let page = use_case
            .execute(&query(Some("quantity:asc"), None))
            .await
            .unwrap();
        let quantities: Vec<_> = page.data.iter().map(|o| o.quantity).collect();
        assert_eq!(quantities, [10, 2, 9]);
    }

    #[tokio::test]
    async fn test_list_regex_search() {
        let repo = seeded(&[
            ("Blue Widget", 1, 10.0),
            ("Red widget", 12, 2.5),
            ("Gadget", 3, 7.0),
        ])
        .await;
        let use_case = ListOrdersUseCase::new(repo);

        let page = use_case
            .execute(&query(None, Some("product:^.*WIDGET$")))
            .await
            .unwrap();
        assert_eq!(products(&page), ["Blue Widget", "Red widget"]);

        let page = use_case
            .execute(&query(None, Some("quantity:^1")))
            .await
            .unwrap();
        assert_eq!(products(&page), ["Blue Widget", "Red widget"]);

        let page = use_case
            .execute(&query(None, Some("price:^2\\.5$")))
            .await
            .unwrap();
        assert_eq!(products(&page), ["Red widget"]);

        // invalid pattern disables filtering
        let page = use_case
            .execute(&query(None, Some("product:(")))
            .await
            .unwrap();
        assert_eq!(page.count, 3);
    }

    #[tokio::test]
    async fn test_list_second_page_of_twenty_five() {
        let names: Vec<String> = (0..25).map(|i| format!("item-{i:02}")).collect();
        let items: Vec<(&str, i64, f64)> = names.iter().map(|n| (n.as_str(), 1, 1.0)).collect();
        let repo = seeded(&items).await;

        let page = ListOrdersUseCase::new(repo)
            .execute(&ListQuery {
                page_number: Some("2".to_string()),
                page_size: Some("10".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.count, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous_page);
        assert!(page.has_next_page);
        assert_eq!(page.data[0].product, "item-10");
        assert_eq!(page.data[9].product, "item-19");
    }

    #[tokio::test]
    async fn test_get_update_delete() {
        let repo = seeded(&[("Widget", 1, 1.0)]).await;
        let id = repo.fetch_all().await.unwrap()[0].id.to_string();

        let view = GetOrderUseCase::new(repo.clone()).execute(&id).await.unwrap();
        assert_eq!(view.product, "Widget");

        let updated = UpdateOrderUseCase::new(repo.clone())
            .execute(&id, input("Gadget", 4, 2.25))
            .await
            .unwrap();
        assert_eq!(updated.to_string(), id);

        let view = GetOrderUseCase::new(repo.clone()).execute(&id).await.unwrap();
        assert_eq!((view.product.as_str(), view.quantity, view.price), ("Gadget", 4, 2.25));

        let err = UpdateOrderUseCase::new(repo.clone())
            .execute(&id, input("Gadget", -4, 2.25))
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::Validation(_)));

        DeleteOrderUseCase::new(repo.clone()).execute(&id).await.unwrap();
        assert!(matches!(
            GetOrderUseCase::new(repo.clone()).execute(&id).await,
            Err(OrderError::NotFound)
        ));
        assert!(matches!(
            DeleteOrderUseCase::new(repo.clone()).execute(&id).await,
            Err(OrderError::NotFound)
        ));
        assert!(matches!(
            UpdateOrderUseCase::new(repo)
                .execute("nope", input("Gadget", 1, 1.0))
                .await,
            Err(OrderError::NotFound)
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::extract::Extension;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use kernel::caller::AuthenticatedUser;
    use kernel::id::UserId;
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryOrderRepository;
    use crate::presentation::router::orders_router_generic;

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_orders_over_http() {
        let app = orders_router_generic(InMemoryOrderRepository::new());

        let (status, body) = send(
            &app,
            request(
                "POST",
                "/",
                Some(json!({ "product": "Widget", "quantity": 2, "price": 4.5 })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "product": "Widget", "quantity": 2, "price": 4.5 }));

        send(
            &app,
            request(
                "POST",
                "/",
                Some(json!({ "product": "Anvil", "quantity": 1, "price": 100 })),
            ),
        )
        .await;

        let (status, body) = send(
            &app,
            request("GET", "/?page_number=1&page_size=1&search=product:w", None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["hasNextPage"], false);
        assert_eq!(body["data"][0]["product"], "Widget");
        let id = body["data"][0]["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, request("GET", "/?page_size=1", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["product"], "Anvil");
        assert_eq!(body["hasNextPage"], true);

        let (status, body) = send(
            &app,
            request(
                "PUT",
                &format!("/{id}"),
                Some(json!({ "product": "Widget", "quantity": 5, "price": 4.5 })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": id }));

        let (_, body) = send(&app, request("GET", &format!("/{id}"), None)).await;
        assert_eq!(body["quantity"], 5);

        let (status, body) = send(&app, request("DELETE", &format!("/{id}"), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id);

        let (status, body) = send(&app, request("GET", &format!("/{id}"), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Order not found");
    }

    #[tokio::test]
    async fn test_mutations_with_authenticated_caller() {
        let caller = AuthenticatedUser {
            user_id: UserId::new(),
        };
        let app = orders_router_generic(InMemoryOrderRepository::new()).layer(Extension(caller));

        let (status, _) = send(
            &app,
            request(
                "POST",
                "/",
                Some(json!({ "product": "Widget", "quantity": 1, "price": 2 })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, request("GET", "/", None)).await;
        let id = body["data"][0]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            request(
                "PUT",
                &format!("/{id}"),
                Some(json!({ "product": "Widget", "quantity": 3, "price": 2 })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": id }));

        let (status, _) = send(&app, request("DELETE", &format!("/{id}"), None)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_negative_quantity_is_bad_request() {
        let app = orders_router_generic(InMemoryOrderRepository::new());
        let (status, body) = send(
            &app,
            request(
                "POST",
                "/",
                Some(json!({ "product": "Widget", "quantity": -2, "price": 1 })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Quantity cannot be negative");
    }
}

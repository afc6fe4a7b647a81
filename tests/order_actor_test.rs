use resource_actor::mock::MockClient;
use resource_actor::FrameworkError;
use restaurant_orders::clients::MenuClient;
use restaurant_orders::menu_actor::MenuError;
use restaurant_orders::model::{MenuItem, MenuItemId, OrderCreate, OrderStatus, Selection};
use restaurant_orders::order_actor::OrderError;
use rust_decimal_macros::dec;

/// Real Order actor with a mocked menu.
///
/// Exercises the resolution rules in `Order::from_create` without running the Menu actor.
#[tokio::test]
async fn test_order_actor_with_mocked_menu() {
    let mut menu_mock = MockClient::<MenuItem>::new();

    let soup = MenuItem::new(MenuItemId(1), "Soup", dec!(5.0));
    let salad = MenuItem::new(MenuItemId(2), "Salad", dec!(3.0));

    // One lookup per requested item, in request order
    menu_mock.expect_get(MenuItemId(1)).return_ok(Some(soup.clone()));
    menu_mock.expect_get(MenuItemId(99)).return_ok(None);
    menu_mock.expect_get(MenuItemId(2)).return_ok(Some(salad.clone()));
    menu_mock.expect_get(MenuItemId(1)).return_ok(Some(soup.clone()));

    let menu_client = MenuClient::new(menu_mock.client());
    let (order_actor, order_client) = restaurant_orders::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(menu_client));

    let placed = order_client
        .create_order(OrderCreate::new(["1", "99", "2", "oops", "1"]))
        .await
        .expect("Order creation failed");
    assert_eq!(placed.status, OrderStatus::Pending);
    assert_eq!(placed.items, vec![soup.clone(), salad, soup]);

    let stored = order_client
        .get_order(placed.id)
        .await
        .unwrap()
        .expect("Order not found");
    assert_eq!(stored, placed);

    menu_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_empty_selection_never_reaches_menu() {
    // No expectations: any menu lookup would fail the mock
    let menu_mock = MockClient::<MenuItem>::new();
    let (order_actor, order_client) = restaurant_orders::order_actor::new(8);
    tokio::spawn(order_actor.run(MenuClient::new(menu_mock.client())));

    let result = order_client
        .create_order(OrderCreate::new(Vec::<Selection>::new()))
        .await;
    assert_eq!(result, Err(OrderError::EmptySelection));
    assert!(order_client.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_menu_failure_aborts_order() {
    let mut menu_mock = MockClient::<MenuItem>::new();
    menu_mock
        .expect_get(MenuItemId(1))
        .return_err(FrameworkError::ActorClosed);

    let (order_actor, order_client) = restaurant_orders::order_actor::new(8);
    tokio::spawn(order_actor.run(MenuClient::new(menu_mock.client())));

    let result = order_client
        .create_order(OrderCreate::new([MenuItemId(1)]))
        .await;
    assert!(matches!(
        result,
        Err(OrderError::Menu(MenuError::ActorCommunicationError(_)))
    ));
    assert!(order_client.list_orders().await.unwrap().is_empty());
    menu_mock.verify();
}

#[tokio::test]
async fn test_status_update_rules() {
    let menu_mock = MockClient::<MenuItem>::new();
    let (order_actor, order_client) = restaurant_orders::order_actor::new(8);
    tokio::spawn(order_actor.run(MenuClient::new(menu_mock.client())));

    // Only unrecognized selections: the order is placed with no items
    let id = order_client
        .create_order(OrderCreate::new(["burger"]))
        .await
        .unwrap()
        .id;

    assert_eq!(
        order_client.update_status(id, "completed").await,
        Ok(OrderStatus::Completed)
    );
    // Going back is allowed
    assert_eq!(
        order_client.update_status(id, "pending").await,
        Ok(OrderStatus::Pending)
    );
    assert_eq!(
        order_client.update_status(id, "").await,
        Err(OrderError::MissingStatus)
    );

    let order = order_client.get_order(id).await.unwrap().unwrap();
    assert!(order.items.is_empty());
    assert_eq!(order.status, OrderStatus::Pending);
}

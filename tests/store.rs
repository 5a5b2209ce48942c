//! CRUD, validation, and billing-log behavior against an in-memory store.

use orderdesk_store::{
    apply_migrations, Bill, BillingLog, Client, ClientRepository, Crud, Order, OrderItem,
    OrderItemRepository, OrderRepository, Product, ProductRepository, StoreConfig, StoreError,
};
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    // One connection: a fresh :memory: database per extra connection would
    // not see the migrated tables.
    let config = StoreConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
    };
    let pool = config.connect().await.expect("connect in-memory store");
    apply_migrations(&pool).await.expect("apply migrations");
    pool
}

fn ann() -> Client {
    Client::new("Ann", "Addr", "ann@x.com", "1234567890")
}

#[tokio::test]
async fn insert_assigns_id_and_round_trips() {
    let pool = test_pool().await;
    let clients = ClientRepository::new(pool);

    let inserted = clients.insert(ann()).await.unwrap();
    assert!(inserted.id > 0);

    let found = clients.find_by_id(inserted.id).await.unwrap().unwrap();
    assert_eq!(found, inserted);

    let all = clients.find_all().await.unwrap();
    assert!(all.contains(&inserted));
}

#[tokio::test]
async fn product_round_trips_every_field() {
    let pool = test_pool().await;
    let products = ProductRepository::new(pool);

    let inserted = products.insert(Product::new("Widget", 9.99, 10)).await.unwrap();
    let found = products.find_by_id(inserted.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Widget");
    assert_eq!(found.price, 9.99);
    assert_eq!(found.stock, 10);
}

#[tokio::test]
async fn find_all_on_empty_table_is_empty_not_error() {
    let pool = test_pool().await;
    let clients = ClientRepository::new(pool);
    assert!(clients.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_then_find_returns_none() {
    let pool = test_pool().await;
    let clients = ClientRepository::new(pool);

    let inserted = clients.insert(ann()).await.unwrap();
    assert!(clients.delete(inserted.id).await.unwrap());
    assert!(clients.find_by_id(inserted.id).await.unwrap().is_none());

    // Unknown id: no-op, reported as such.
    assert!(!clients.delete(inserted.id).await.unwrap());
}

#[tokio::test]
async fn update_changes_only_the_targeted_row() {
    let pool = test_pool().await;
    let products = ProductRepository::new(pool);

    let a = products.insert(Product::new("Widget", 9.99, 10)).await.unwrap();
    let b = products.insert(Product::new("Gadget", 4.50, 7)).await.unwrap();

    let mut changed = a.clone();
    changed.price = 12.49;
    changed.stock = 8;
    products.update(changed.clone()).await.unwrap();

    let a_after = products.find_by_id(a.id).await.unwrap().unwrap();
    let b_after = products.find_by_id(b.id).await.unwrap().unwrap();
    assert_eq!(a_after, changed);
    assert_eq!(b_after, b);
}

#[tokio::test]
async fn update_of_missing_row_is_not_found() {
    let pool = test_pool().await;
    let products = ProductRepository::new(pool);

    let mut ghost = Product::new("Ghost", 1.0, 1);
    ghost.id = 9999;
    let err = products.update(ghost).await.unwrap_err();
    assert!(err.is_not_found(), "got {err}");
}

#[tokio::test]
async fn invalid_input_is_rejected_before_any_store_call() {
    let pool = test_pool().await;
    let clients = ClientRepository::new(pool.clone());
    let products = ProductRepository::new(pool.clone());
    let orders = OrderRepository::new(pool.clone());
    let items = OrderItemRepository::new(pool);

    let mut c = ann();
    c.email = "ann.x.com".into();
    assert!(matches!(
        clients.insert(c).await,
        Err(StoreError::Validation(_))
    ));
    let mut c = ann();
    c.phone = "555".into();
    assert!(matches!(
        clients.insert(c).await,
        Err(StoreError::Validation(_))
    ));

    assert!(matches!(
        products.insert(Product::new("Widget", -1.0, 10)).await,
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        products.insert(Product::new("Widget", 9.99, -1)).await,
        Err(StoreError::Validation(_))
    ));

    let now = chrono::Utc::now();
    assert!(matches!(
        orders.insert(Order::new(0, now, 0.0)).await,
        Err(StoreError::Validation(_))
    ));

    assert!(matches!(
        items.insert(OrderItem::new(1, 1, 0, 9.99)).await,
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        items.insert(OrderItem::new(1, 1, 3, -0.5)).await,
        Err(StoreError::Validation(_))
    ));

    // Nothing above reached the store.
    assert!(clients.find_all().await.unwrap().is_empty());
    assert!(products.find_all().await.unwrap().is_empty());
    assert!(orders.find_all().await.unwrap().is_empty());
    assert!(items.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn orders_and_items_reject_updates() {
    let pool = test_pool().await;
    let orders = OrderRepository::new(pool.clone());
    let items = OrderItemRepository::new(pool);

    let now = chrono::Utc::now();
    assert!(matches!(
        orders.update(Order::new(1, now, 1.0)).await,
        Err(StoreError::Immutable(_))
    ));
    assert!(matches!(
        items.update(OrderItem::new(1, 1, 1, 1.0)).await,
        Err(StoreError::Immutable(_))
    ));
}

#[tokio::test]
async fn billing_log_round_trips() {
    let pool = test_pool().await;
    let billing = BillingLog::new(pool);

    let date = chrono::Utc::now();
    let bill = billing
        .insert_bill(Bill::new(41, 7, "Ann", date, 29.97))
        .await
        .unwrap();
    assert!(bill.id > 0);

    let bills = billing.find_all_bills().await.unwrap();
    let found = bills.iter().find(|b| b.id == bill.id).unwrap();
    assert_eq!(found.order_id, 41);
    assert_eq!(found.client_id, 7);
    assert_eq!(found.client_name, "Ann");
    assert_eq!(found.total_amount, 29.97);
    // Dates are stored with millisecond precision.
    assert_eq!(
        found.order_date.timestamp_millis(),
        date.timestamp_millis()
    );
}

#[tokio::test]
async fn bills_keep_the_client_name_at_placement_time() {
    let pool = test_pool().await;
    let clients = ClientRepository::new(pool.clone());
    let billing = BillingLog::new(pool);

    let client = clients.insert(ann()).await.unwrap();
    billing
        .insert_bill(Bill::new(1, client.id, &client.name, chrono::Utc::now(), 5.0))
        .await
        .unwrap();

    let mut renamed = client.clone();
    renamed.name = "Anne".into();
    clients.update(renamed).await.unwrap();

    let bills = billing.find_all_bills().await.unwrap();
    assert_eq!(bills[0].client_name, "Ann");
}

use cart_store::{
    CartStore, FileStore, HttpCatalog, MemoryStore, RecordingNotifier, DEFAULT_CART_KEY,
};
use httpmock::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";

fn mock_stock(server: &MockServer, id: u64, amount: u32) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/stock/{}", id));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": id, "amount": amount}));
    })
}

fn mock_product<'a>(server: &'a MockServer, id: u64, name: &str, price: f64) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/products/{}", id));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": id,
                "name": name,
                "price": price,
                "imageUrl": format!("https://shop.example/img/{}.jpg", id)
            }));
    })
}

fn store_with_memory(
    server: &MockServer,
    seeded_payload: Option<&str>,
) -> (
    CartStore<HttpCatalog, Arc<RecordingNotifier>, MemoryStore>,
    Arc<RecordingNotifier>,
) {
    let storage = match seeded_payload {
        Some(payload) => MemoryStore::with_entry(DEFAULT_CART_KEY, payload),
        None => MemoryStore::new(),
    };
    let notifier = Arc::new(RecordingNotifier::new());
    let store = CartStore::new(
        HttpCatalog::new(server.base_url()),
        Arc::clone(&notifier),
        storage,
        DEFAULT_CART_KEY,
    );
    (store, notifier)
}

#[tokio::test]
async fn add_product_appends_a_new_entry_and_persists_it() {
    let server = MockServer::start();
    let stock = mock_stock(&server, 1, 5);
    let product = mock_product(&server, 1, "Tênis de Caminhada", 139.9);

    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().to_str().unwrap().to_string();
    let notifier = Arc::new(RecordingNotifier::new());
    let store = CartStore::new(
        HttpCatalog::new(server.base_url()),
        Arc::clone(&notifier),
        FileStore::new(data_dir.clone()),
        DEFAULT_CART_KEY,
    );

    store.add_product(1).await;

    stock.assert();
    product.assert();
    assert!(notifier.messages().is_empty());

    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id, 1);
    assert_eq!(cart[0].name, "Tênis de Caminhada");
    assert_eq!(cart[0].amount, 1);

    // A fresh store over the same directory sees the committed cart.
    let reloaded = CartStore::new(
        HttpCatalog::new(server.base_url()),
        RecordingNotifier::new(),
        FileStore::new(data_dir),
        DEFAULT_CART_KEY,
    );
    assert_eq!(reloaded.cart(), cart);
}

#[tokio::test]
async fn add_product_increments_an_already_carted_entry() {
    let server = MockServer::start();
    mock_stock(&server, 1, 5);
    mock_product(&server, 1, "Tênis", 139.9);

    let seeded = serde_json::json!([
        {"id": 1, "name": "Tênis", "price": 139.9, "imageUrl": "x", "amount": 1}
    ])
    .to_string();
    let (store, notifier) = store_with_memory(&server, Some(&seeded));

    store.add_product(1).await;

    assert!(notifier.messages().is_empty());
    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].amount, 2);
}

#[tokio::test]
async fn add_product_rejects_when_stock_is_a_single_unit() {
    let server = MockServer::start();
    mock_stock(&server, 1, 1);
    mock_product(&server, 1, "Tênis", 139.9);

    let (store, notifier) = store_with_memory(&server, None);
    store.add_product(1).await;

    assert!(store.cart().is_empty());
    assert_eq!(notifier.messages(), vec![OUT_OF_STOCK.to_string()]);
}

#[tokio::test]
async fn add_product_rejects_when_cart_amount_already_meets_stock() {
    let server = MockServer::start();
    mock_stock(&server, 1, 2);
    mock_product(&server, 1, "Tênis", 139.9);

    let seeded = serde_json::json!([
        {"id": 1, "name": "Tênis", "price": 139.9, "imageUrl": "x", "amount": 2}
    ])
    .to_string();
    let (store, notifier) = store_with_memory(&server, Some(&seeded));

    store.add_product(1).await;

    assert_eq!(store.cart()[0].amount, 2);
    assert_eq!(notifier.messages(), vec![OUT_OF_STOCK.to_string()]);
}

#[tokio::test]
async fn add_product_reports_add_failure_when_stock_lookup_is_missing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/stock/99");
        then.status(404);
    });

    let (store, notifier) = store_with_memory(&server, None);
    store.add_product(99).await;

    assert!(store.cart().is_empty());
    assert_eq!(
        notifier.messages(),
        vec!["Erro na adição do produto".to_string()]
    );
}

#[tokio::test]
async fn add_product_reports_out_of_stock_when_only_the_product_lookup_is_missing() {
    let server = MockServer::start();
    mock_stock(&server, 7, 5);
    server.mock(|when, then| {
        when.method(GET).path("/products/7");
        then.status(404);
    });

    let (store, notifier) = store_with_memory(&server, None);
    store.add_product(7).await;

    assert!(store.cart().is_empty());
    assert_eq!(notifier.messages(), vec![OUT_OF_STOCK.to_string()]);
}

#[tokio::test]
async fn add_product_surfaces_other_catalog_failures_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/stock/1");
        then.status(500);
    });

    let (store, notifier) = store_with_memory(&server, None);
    store.add_product(1).await;

    assert!(store.cart().is_empty());
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("500"), "got: {}", messages[0]);
}

#[tokio::test]
async fn remove_product_drops_the_entry_and_persists() {
    let server = MockServer::start();
    let seeded = serde_json::json!([
        {"id": 1, "name": "Tênis", "price": 139.9, "imageUrl": "x", "amount": 1},
        {"id": 2, "name": "Sandália", "price": 99.9, "imageUrl": "y", "amount": 3}
    ])
    .to_string();
    let (store, notifier) = store_with_memory(&server, Some(&seeded));

    store.remove_product(1).await;

    assert!(notifier.messages().is_empty());
    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id, 2);
    assert_eq!(cart[0].amount, 3);
}

#[tokio::test]
async fn remove_product_rejects_an_absent_id() {
    let server = MockServer::start();
    let seeded = serde_json::json!([
        {"id": 1, "name": "Tênis", "price": 139.9, "imageUrl": "x", "amount": 1}
    ])
    .to_string();
    let (store, notifier) = store_with_memory(&server, Some(&seeded));

    store.remove_product(2).await;

    assert_eq!(store.cart().len(), 1);
    assert_eq!(
        notifier.messages(),
        vec!["Erro na remoção do produto".to_string()]
    );
}

#[tokio::test]
async fn update_amount_sets_the_quantity() {
    let server = MockServer::start();
    mock_stock(&server, 1, 5);

    let seeded = serde_json::json!([
        {"id": 1, "name": "Tênis", "price": 139.9, "imageUrl": "x", "amount": 1}
    ])
    .to_string();
    let (store, notifier) = store_with_memory(&server, Some(&seeded));

    store.update_product_amount(1, 3).await;

    assert!(notifier.messages().is_empty());
    assert_eq!(store.cart()[0].amount, 3);
}

#[tokio::test]
async fn update_amount_requires_strictly_less_than_stock() {
    let server = MockServer::start();
    mock_stock(&server, 1, 5);

    let seeded = serde_json::json!([
        {"id": 1, "name": "Tênis", "price": 139.9, "imageUrl": "x", "amount": 1}
    ])
    .to_string();
    let (store, notifier) = store_with_memory(&server, Some(&seeded));

    store.update_product_amount(1, 5).await;

    assert_eq!(store.cart()[0].amount, 1);
    assert_eq!(notifier.messages(), vec![OUT_OF_STOCK.to_string()]);
}

#[tokio::test]
async fn update_amount_rejects_a_target_of_one_regardless_of_stock() {
    let server = MockServer::start();
    mock_stock(&server, 1, 100);

    let seeded = serde_json::json!([
        {"id": 1, "name": "Tênis", "price": 139.9, "imageUrl": "x", "amount": 4}
    ])
    .to_string();
    let (store, notifier) = store_with_memory(&server, Some(&seeded));

    store.update_product_amount(1, 1).await;

    assert_eq!(store.cart()[0].amount, 4);
    assert_eq!(
        notifier.messages(),
        vec!["Não é possível diminuir de 1 a quantidade do produto".to_string()]
    );
}

#[tokio::test]
async fn update_amount_rejects_a_product_not_in_the_cart() {
    let server = MockServer::start();
    mock_stock(&server, 9, 5);

    let (store, notifier) = store_with_memory(&server, None);
    store.update_product_amount(9, 3).await;

    assert!(store.cart().is_empty());
    assert_eq!(
        notifier.messages(),
        vec!["Erro na alteração de quantidade do produto".to_string()]
    );
}

#[tokio::test]
async fn update_amount_reports_update_failure_when_stock_lookup_is_missing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/stock/1");
        then.status(404);
    });

    let seeded = serde_json::json!([
        {"id": 1, "name": "Tênis", "price": 139.9, "imageUrl": "x", "amount": 2}
    ])
    .to_string();
    let (store, notifier) = store_with_memory(&server, Some(&seeded));

    store.update_product_amount(1, 3).await;

    assert_eq!(store.cart()[0].amount, 2);
    assert_eq!(
        notifier.messages(),
        vec!["Erro na alteração de quantidade do produto".to_string()]
    );
}

#[tokio::test]
async fn corrupt_persisted_payload_loads_as_an_empty_cart() {
    let server = MockServer::start();
    let (store, notifier) = store_with_memory(&server, Some("{definitely not json"));

    assert!(store.cart().is_empty());
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn failed_save_still_advances_the_in_memory_cart() {
    let server = MockServer::start();
    mock_stock(&server, 1, 5);
    mock_product(&server, 1, "Tênis", 139.9);

    // Point the file store at a path that is a file, so directory creation
    // and the save both fail.
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let notifier = Arc::new(RecordingNotifier::new());
    let store = CartStore::new(
        HttpCatalog::new(server.base_url()),
        Arc::clone(&notifier),
        FileStore::new(blocker.path().to_str().unwrap().to_string()),
        DEFAULT_CART_KEY,
    );

    store.add_product(1).await;

    // Best-effort persistence: no user-facing error, state still updated.
    assert!(notifier.messages().is_empty());
    assert_eq!(store.cart().len(), 1);
}

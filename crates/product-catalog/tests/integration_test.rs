use std::num::NonZeroUsize;
use std::time::Duration;

use product_catalog::clients::StoreHandle;
use product_catalog::config::CatalogConfig;
use product_catalog::error::{CatalogError, LoadError};
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::loader::{seed_products, FailingLoader, MockCatalogLoader};
use product_catalog::model::{Product, ProductId};
use product_catalog::query::{derive, paginate, FilterCriteria, SortKey};
use product_catalog::view::FormField;

fn config(page_size: usize) -> CatalogConfig {
    CatalogConfig {
        page_size: NonZeroUsize::new(page_size).unwrap(),
        load_delay_ms: 0,
        channel_capacity: NonZeroUsize::new(8).unwrap(),
    }
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

/// Load, sort, append and search against a running system.
#[tokio::test]
async fn test_full_catalog_flow() {
    let config = config(6);
    let mut system = CatalogSystem::start(&config, MockCatalogLoader::new(Duration::from_millis(20)));

    assert_eq!(system.wait_loaded().await.expect("load failed"), 3);
    assert!(system.is_load_finished());

    let mut session = system.session().await.expect("session failed");
    session.list.set_sort(SortKey::PriceAsc);
    assert_eq!(
        names(session.list.derived()),
        vec!["Cadeira Gamer", "Smartphone", "Notebook"]
    );

    session.form.set(FormField::Name, "Apple Watch");
    session.form.set(FormField::Category, "Relógios");
    session.form.set(FormField::Price, "R$ 3.000,00");
    session.form.set(FormField::Description, "Relógio inteligente.");
    let watch = session.submit_form().await.expect("submit failed");
    assert_eq!(watch.price(), 3000.0);

    let all = system.client.snapshot().await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all.last(), Some(&watch));

    session.list.set_sort(SortKey::None);
    session.list.set_search("WATCH");
    assert_eq!(names(session.list.derived()), vec!["Apple Watch"]);

    session.list.set_search("e");
    assert_eq!(session.list.derived().len(), 4);

    drop(session);
    system.shutdown().await.expect("shutdown failed");
}

#[tokio::test]
async fn test_store_is_usable_while_loading() {
    let mut system =
        CatalogSystem::start(&config(6), MockCatalogLoader::new(Duration::from_millis(200)));

    let mut session = system.session().await.unwrap();
    assert!(session.list.render().is_empty());
    assert!(!system.is_load_finished());

    // the load lands as a replace and wakes the session
    let revision = session.changed().await.unwrap();
    assert_eq!(revision.len, 3);
    assert_eq!(session.list.products().len(), 3);
    assert_eq!(system.wait_loaded().await.unwrap(), 3);

    drop(session);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_load_leaves_store_empty() {
    let mut system = CatalogSystem::start(&config(6), FailingLoader::new("connection refused"));

    let err = system.wait_loaded().await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::Load(LoadError::Unavailable("connection refused".into()))
    );
    // asking again reports the same outcome
    assert_eq!(system.wait_loaded().await.unwrap_err(), err);

    let mut session = system.session().await.unwrap();
    let render = session.list.render();
    assert!(render.is_empty());
    assert_eq!(render.empty_message(), Some("Nenhum produto encontrado."));
    assert!(!render.show_pagination);

    drop(session);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_aborts_pending_load() {
    let system = CatalogSystem::start(&config(6), MockCatalogLoader::new(Duration::from_secs(30)));
    tokio::time::timeout(Duration::from_secs(5), system.shutdown())
        .await
        .expect("shutdown hung")
        .unwrap();
}

#[tokio::test]
async fn test_seven_products_across_two_pages() {
    let mut products = seed_products();
    for n in 4..=7 {
        products.push(Product::new(ProductId(n), format!("Produto {n}"), "Diversos", 10.0 * n as f64));
    }
    let mut system = CatalogSystem::start(
        &config(6),
        MockCatalogLoader::with_products(Duration::ZERO, products.clone()),
    );
    system.wait_loaded().await.unwrap();

    let page = paginate(&products, NonZeroUsize::new(6).unwrap(), 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_pages, 2);

    let mut session = system.session().await.unwrap();
    let first = session.list.render();
    assert_eq!(first.items.len(), 6);
    assert!(first.show_pagination);
    assert!(!first.has_prev);
    assert!(first.has_next);

    assert!(session.list.next_page());
    let second = session.list.render();
    assert_eq!(names(&second.items), vec!["Produto 7"]);
    assert_eq!(second.page_label(), "Página 2 de 2");
    assert!(!session.list.next_page());

    drop(session);
    system.shutdown().await.unwrap();
}

#[test]
fn test_min_price_without_max_is_unbounded_above() {
    let criteria = FilterCriteria::from_inputs("", "R$ 2.000,00", "", SortKey::None);
    let derived = derive(&seed_products(), &criteria);
    assert_eq!(names(&derived), vec!["Notebook", "Smartphone"]);
    assert!(derived.iter().all(|p| p.price() >= 2000.0));
}

#[tokio::test]
async fn test_single_slot_channel_still_serves_requests() {
    let config = CatalogConfig {
        channel_capacity: NonZeroUsize::MIN,
        ..config(6)
    };
    let mut system = CatalogSystem::start(&config, MockCatalogLoader::new(Duration::ZERO));
    assert_eq!(system.wait_loaded().await.unwrap(), 3);

    let reads = (0..10).map(|_| {
        let client = system.client.clone();
        tokio::spawn(async move { client.len().await })
    });
    for read in reads.collect::<Vec<_>>() {
        assert_eq!(read.await.unwrap().unwrap(), 3);
    }

    system.shutdown().await.unwrap();
}

use product_catalog::config::CatalogConfig;
use product_catalog::lifecycle::{setup_tracing, CatalogSession, CatalogSystem};
use product_catalog::loader::MockCatalogLoader;
use product_catalog::query::{format_price, SortKey};
use product_catalog::view::FormField;
use tracing::{error, info, Instrument};

fn print_page(session: &mut CatalogSession) {
    let render = session.list.render();
    if let Some(message) = render.empty_message() {
        println!("{message}");
        return;
    }
    for product in &render.items {
        println!(
            "  #{} {} ({}) {}",
            product.id,
            product.name,
            product.category,
            format_price(product.price())
        );
    }
    if render.show_pagination {
        println!("  {}", render.page_label());
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CatalogConfig::from_env();
    info!(
        page_size = config.page_size.get(),
        load_delay_ms = config.load_delay_ms,
        "Starting catalog"
    );

    let mut system = CatalogSystem::start(&config, MockCatalogLoader::new(config.load_delay()));
    let loaded = system.wait_loaded().await.map_err(|e| e.to_string())?;
    info!(count = loaded, "Catalog ready");

    let mut session = system.session().await.map_err(|e| e.to_string())?;

    session.list.set_sort(SortKey::PriceAsc);
    println!("Catálogo ({}):", SortKey::PriceAsc.label());
    print_page(&mut session);

    session.form.set(FormField::Name, "Apple Watch");
    session.form.set(FormField::Category, "Relógios");
    session.form.set(FormField::Price, "300000");
    session.form.set(FormField::Description, "Relógio inteligente com GPS.");

    let span = tracing::info_span!("product_submission");
    let submitted = async { session.submit_form().await }.instrument(span).await;
    match submitted {
        Ok(product) => info!(id = %product.id, "Product submitted"),
        Err(e) => error!(error = %e, "Product submission failed"),
    }

    session.list.set_search("watch");
    println!("Busca \"watch\":");
    print_page(&mut session);

    drop(session);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}

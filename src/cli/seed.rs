use stockroom::error::Result;
use stockroom::store::{BookFields, GroceryFields, Store};

/// Run the seed command to populate the record store with sample catalog data
pub async fn run(config_path: String) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    let config = stockroom::config::load_config(&config_path)?;

    tracing::info!("🗄️  Connecting to {}", config.store.database_url);
    let store = Store::connect(&config.store.database_url, config.store.max_connections).await?;

    if store.category_count().await? > 0 {
        tracing::warn!("Store already holds catalog data, skipping seed");
        return Ok(());
    }

    let mut categories = Vec::new();
    for title in ["Fiction", "Non-fiction", "Produce", "Dairy", "Bakery"] {
        let category = store.insert_category(title).await?;
        tracing::info!("   • Category {} ({})", category.id, category.title);
        categories.push(category);
    }

    for fields in sample_books() {
        let book = store.insert_book(&fields).await?;
        tracing::info!("   • Book {} ({})", book.id, book.title);
    }

    let produce = &categories[2];
    let dairy = &categories[3];
    let bakery = &categories[4];

    for fields in sample_groceries(produce.id, dairy.id, bakery.id) {
        let grocery = store.insert_grocery(&fields).await?;
        tracing::info!("   • Grocery {} ({})", grocery.product_tag, grocery.name);
    }

    tracing::info!("");
    tracing::info!("🎉 Sample catalog seeded");
    tracing::info!("💡 Start the server with 'stockroom serve --config {}'", config_path);

    Ok(())
}

fn sample_books() -> Vec<BookFields> {
    vec![
        BookFields {
            title: "The Left Hand of Darkness".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            isbn: "9780441478125".to_string(),
            pages: 304,
            price: 12.99,
            quantity: 12,
            description: "An envoy on a planet where gender is mutable.".to_string(),
            imageurl: "https://covers.example.com/left-hand.jpg".to_string(),
            status: "in_stock".to_string(),
        },
        BookFields {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            isbn: "9780441172719".to_string(),
            pages: 412,
            price: 10.99,
            quantity: 5,
            description: "Politics and prophecy on a desert planet.".to_string(),
            imageurl: "https://covers.example.com/dune.jpg".to_string(),
            status: "in_stock".to_string(),
        },
        BookFields {
            title: "The Dispossessed".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            isbn: "9780061054884".to_string(),
            pages: 387,
            price: 11.49,
            quantity: 0,
            description: "A physicist between two worlds.".to_string(),
            imageurl: "https://covers.example.com/dispossessed.jpg".to_string(),
            status: "out_of_stock".to_string(),
        },
        BookFields {
            title: "A Wizard of Earthsea".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            isbn: "9780547773742".to_string(),
            pages: 183,
            price: 8.99,
            quantity: 21,
            description: "A young mage learns the cost of power.".to_string(),
            imageurl: "https://covers.example.com/earthsea.jpg".to_string(),
            status: "in_stock".to_string(),
        },
    ]
}

fn sample_groceries(produce: i64, dairy: i64, bakery: i64) -> Vec<GroceryFields> {
    vec![
        GroceryFields {
            product_tag: "PRD-0001".to_string(),
            name: "Bananas".to_string(),
            category_id: produce,
            price: 0.59,
            quantity: 150,
            imageurl: "https://images.example.com/bananas.jpg".to_string(),
            status: "in_stock".to_string(),
        },
        GroceryFields {
            product_tag: "PRD-0002".to_string(),
            name: "Whole Milk".to_string(),
            category_id: dairy,
            price: 3.49,
            quantity: 40,
            imageurl: "https://images.example.com/milk.jpg".to_string(),
            status: "in_stock".to_string(),
        },
        GroceryFields {
            product_tag: "PRD-0003".to_string(),
            name: "Sourdough Loaf".to_string(),
            category_id: bakery,
            price: 4.25,
            quantity: 0,
            imageurl: "https://images.example.com/sourdough.jpg".to_string(),
            status: "out_of_stock".to_string(),
        },
    ]
}

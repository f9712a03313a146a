//! Sample-data seeder
//!
//! Populates the configured database with sample categories, products
//! (with randomized stock levels) and sales spread over the last 30 days.
//!
//! Usage: `cargo run --bin seed`

use admin_server::{AppState, Config, db};
use rand::Rng;
use rand::seq::SliceRandom;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const CATEGORIES: &[(&str, &str)] = &[
    ("Electronics", "Phones, computers and accessories"),
    ("Home & Kitchen", "Appliances and household goods"),
    ("Books", "Print and audio books"),
    ("Toys", "Games and toys for all ages"),
    ("Sports", "Sporting goods and outdoor gear"),
];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Compact", "Wireless", "Portable", "Classic", "Premium", "Ergonomic", "Foldable", "Smart",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Speaker", "Kettle", "Lamp", "Backpack", "Notebook", "Headphones", "Blender", "Tripod",
    "Keyboard", "Bottle",
];

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,admin_server=info".into()),
        )
        .init();

    let config = Config::from_env();
    let state = AppState::new(&config).await?;
    let pool = &state.pool;
    let mut rng = rand::thread_rng();

    tracing::info!("Creating sample categories");
    let mut category_ids = Vec::new();
    for (name, description) in CATEGORIES {
        let category = db::categories::create(pool, name, description).await?;
        category_ids.push(category.id);
    }
    tracing::info!("Created {} categories", category_ids.len());

    tracing::info!("Creating sample products with inventory");
    let mut products = Vec::new();
    for _ in 0..20 {
        let name = format!(
            "{} {}",
            PRODUCT_ADJECTIVES.choose(&mut rng).unwrap_or(&"Plain"),
            PRODUCT_NOUNS.choose(&mut rng).unwrap_or(&"Widget"),
        );
        let price = round_cents(rng.gen_range(10.0..1000.0));
        let category_id = category_ids[rng.gen_range(0..category_ids.len())];

        let product = db::products::create(pool, &name, None, price, category_id).await?;

        // Randomize the stock created alongside the product
        let quantity = rng.gen_range(0..=100);
        let threshold = rng.gen_range(5..=20);
        db::inventory::update_by_product_id(pool, product.id, Some(quantity), Some(threshold))
            .await?;

        products.push(product);
    }
    tracing::info!("Created {} products with inventory", products.len());

    tracing::info!("Creating sample sales");
    let now = admin_server::util::now_millis();
    for _ in 0..50 {
        let product = &products[rng.gen_range(0..products.len())];
        let quantity = rng.gen_range(1..=5);
        let total_amount = round_cents(quantity as f64 * product.price);
        let sale_date = now - rng.gen_range(0..30 * DAY_MILLIS);

        db::sales::create(
            pool,
            product.id,
            quantity,
            product.price,
            total_amount,
            sale_date,
        )
        .await?;
    }
    tracing::info!("Created 50 sales records");

    tracing::info!("Database seeding completed");
    Ok(())
}

//! Demo catalog seeding.
//!
//! The HTTP surface has no write path for products, so this command is
//! how a fresh shop gets a catalog. Idempotent: it refuses to run against
//! a non-empty products table.

use rust_decimal::Decimal;
use tracing::{info, warn};

use myshop_core::Price;
use myshop_server::db::ProductRepository;

/// A demo product to insert.
struct DemoProduct {
    name: &'static str,
    price: i64,
    description: &'static str,
    image: &'static str,
    category: Option<&'static str>,
}

const DEMO_CATALOG: &[DemoProduct] = &[
    DemoProduct {
        name: "Ceramic Mug",
        price: 40,
        description: "A plain white ceramic mug, 330 ml.",
        image: "https://via.placeholder.com/150?text=Mug",
        category: Some("Kitchen"),
    },
    DemoProduct {
        name: "Cotton T-Shirt",
        price: 90,
        description: "Unisex cotton t-shirt with the shop logo.",
        image: "https://via.placeholder.com/150?text=Shirt",
        category: Some("Apparel"),
    },
    DemoProduct {
        name: "Canvas Tote Bag",
        price: 55,
        description: "Heavy-duty canvas tote for groceries.",
        image: "https://via.placeholder.com/150?text=Tote",
        category: Some("Apparel"),
    },
    DemoProduct {
        name: "Sticker Pack",
        price: 15,
        description: "Six assorted vinyl stickers.",
        image: "https://via.placeholder.com/150?text=Stickers",
        category: None,
    },
    DemoProduct {
        name: "Scented Candle",
        price: 65,
        description: "Soy wax candle, vanilla and cedar.",
        image: "https://via.placeholder.com/150?text=Candle",
        category: Some("Home"),
    },
];

/// Insert the demo catalog if the products table is empty.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;
    let repo = ProductRepository::new(&pool);

    let existing = repo.count().await?;
    if existing > 0 {
        warn!(existing, "products table is not empty, skipping seed");
        return Ok(());
    }

    for demo in DEMO_CATALOG {
        let price = Price::new(Decimal::from(demo.price))?;
        let product = repo
            .insert(demo.name, price, demo.description, demo.image, demo.category)
            .await?;
        info!(id = %product.id, name = %product.name, "seeded product");
    }

    info!(count = DEMO_CATALOG.len(), "demo catalog seeded");
    Ok(())
}

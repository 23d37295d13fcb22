//! Database seeders for built-in data
//!
//! The catalog has no create/update routes; products are managed
//! out-of-band. Seeding a demo catalog on first start gives a fresh
//! instance something to list.

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

/// Seed a demo product catalog if the products table is empty
pub async fn seed_catalog(pool: &SqlitePool) -> Result<()> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if count.0 > 0 {
        return Ok(());
    }

    info!("Seeding demo product catalog...");

    // Format: (name, description, price, category, image, stock)
    let products: Vec<(&str, &str, f64, &str, &str, i64)> = vec![
        (
            "Mechanical Keyboard",
            "87-key mechanical keyboard with hot-swappable switches.",
            89.99,
            "peripherals",
            "/images/keyboard.jpg",
            42,
        ),
        (
            "Wireless Mouse",
            "Low-latency wireless mouse, USB-C rechargeable.",
            39.99,
            "peripherals",
            "/images/mouse.jpg",
            120,
        ),
        (
            "27\" Monitor",
            "27-inch 1440p IPS display, 144Hz.",
            279.00,
            "displays",
            "/images/monitor.jpg",
            15,
        ),
        (
            "USB-C Hub",
            "7-in-1 hub with HDMI, ethernet and card reader.",
            24.50,
            "accessories",
            "/images/hub.jpg",
            200,
        ),
    ];

    for (name, description, price, category, image, stock) in products {
        sqlx::query(
            "INSERT INTO products (id, name, description, price, category, image, stock)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(category)
        .bind(image)
        .bind(stock)
        .execute(pool)
        .await?;
    }

    info!("Demo catalog seeded");
    Ok(())
}

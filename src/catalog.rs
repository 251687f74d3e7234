//! Product catalog loading and the built-in demo data.
//!
//! The backend is stubbed: the demo catalog stands in for the product
//! listing a deployment would fetch. A catalog can also be loaded from a
//! JSON file and validated, which backs the `catalog` CLI subcommand.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::types::{Category, ImageRef, Money, Product, PromoSlide};

/// A loadable set of products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        Ok(catalog)
    }

    /// Validate the catalog
    pub fn validate(&self) -> Result<()> {
        if self.products.is_empty() {
            anyhow::bail!("Catalog must contain at least one product");
        }

        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id) {
                anyhow::bail!("Duplicate product id: {}", product.id);
            }
            if product.name.trim().is_empty() {
                anyhow::bail!("Product {} has an empty name", product.id);
            }
            if product.price.cents() <= 0 {
                anyhow::bail!("Product {} has a non-positive price", product.id);
            }
            if !(0.0..=5.0).contains(&product.rating) {
                anyhow::bail!("Product {} rating must be between 0 and 5", product.id);
            }
        }

        Ok(())
    }

    /// The built-in demo catalog served by the stubbed backend
    pub fn demo() -> Self {
        fn product(
            id: u32,
            name: &str,
            description: &str,
            cents: i64,
            category: Category,
            rating: f32,
            stock: u32,
            image: &str,
        ) -> Product {
            Product {
                id,
                name: name.to_string(),
                description: description.to_string(),
                price: Money::from_cents(cents),
                category,
                rating,
                stock,
                image: ImageRef::new(image),
            }
        }

        Self {
            products: vec![
                product(
                    1001,
                    "Merino Crewneck Sweater",
                    "Midweight merino knit with a relaxed fit and ribbed cuffs.",
                    7900,
                    Category::Clothing,
                    4.6,
                    24,
                    "products/merino-crewneck",
                ),
                product(
                    1002,
                    "Oxford Button-Down Shirt",
                    "Garment-washed cotton oxford in a classic cut.",
                    5400,
                    Category::Clothing,
                    4.3,
                    40,
                    "products/oxford-shirt",
                ),
                product(
                    1003,
                    "Selvedge Denim Jeans",
                    "14 oz raw selvedge denim, straight leg, ages beautifully.",
                    12800,
                    Category::Clothing,
                    4.8,
                    12,
                    "products/selvedge-jeans",
                ),
                product(
                    2001,
                    "Trail Runner Sneakers",
                    "Grippy lugged outsole and a breathable mesh upper.",
                    9600,
                    Category::Shoes,
                    4.4,
                    18,
                    "products/trail-runners",
                ),
                product(
                    2002,
                    "Leather Chelsea Boots",
                    "Full-grain leather with elastic gussets and a stacked heel.",
                    18500,
                    Category::Shoes,
                    4.7,
                    7,
                    "products/chelsea-boots",
                ),
                product(
                    3001,
                    "Wireless ANC Headphones",
                    "35-hour battery, multipoint pairing, and deep noise cancellation.",
                    24900,
                    Category::Electronics,
                    4.5,
                    15,
                    "products/anc-headphones",
                ),
                product(
                    3002,
                    "Mechanical Keyboard",
                    "Hot-swappable switches, PBT caps, and a gasket-mounted deck.",
                    13900,
                    Category::Electronics,
                    4.6,
                    22,
                    "products/mech-keyboard",
                ),
                product(
                    3003,
                    "Smart Fitness Band",
                    "Heart rate, sleep tracking, and a two-week battery.",
                    6900,
                    Category::Electronics,
                    4.1,
                    31,
                    "products/fitness-band",
                ),
                product(
                    4001,
                    "Canvas Weekender Bag",
                    "Waxed canvas with leather trim and a padded laptop sleeve.",
                    11200,
                    Category::Accessories,
                    4.4,
                    9,
                    "products/weekender-bag",
                ),
                product(
                    4002,
                    "Automatic Field Watch",
                    "38 mm brushed case, sapphire crystal, 120-hour reserve.",
                    32500,
                    Category::Accessories,
                    4.9,
                    4,
                    "products/field-watch",
                ),
                product(
                    5001,
                    "Stoneware Pour-Over Set",
                    "Hand-glazed dripper and carafe for a slow morning brew.",
                    6400,
                    Category::Home,
                    4.2,
                    26,
                    "products/pour-over-set",
                ),
                product(
                    5002,
                    "Linen Duvet Cover",
                    "Stonewashed European flax that gets softer with every wash.",
                    15900,
                    Category::Home,
                    4.5,
                    14,
                    "products/linen-duvet",
                ),
                product(
                    6001,
                    "Vitamin C Face Serum",
                    "Brightening daily serum with hyaluronic acid.",
                    4200,
                    Category::Beauty,
                    4.0,
                    48,
                    "products/vitc-serum",
                ),
                product(
                    6002,
                    "Cedar & Sage Candle",
                    "55-hour burn, cotton wick, poured in small batches.",
                    2800,
                    Category::Beauty,
                    4.3,
                    37,
                    "products/cedar-candle",
                ),
            ],
        }
    }
}

/// Promotional slides shown by the onboarding carousel
pub fn promo_slides() -> Vec<PromoSlide> {
    fn slide(title: &str, tagline: &str, image: &str) -> PromoSlide {
        PromoSlide {
            title: title.to_string(),
            tagline: tagline.to_string(),
            image: ImageRef::new(image),
        }
    }

    vec![
        slide(
            "New Season Arrivals",
            "Fresh knits, denim, and boots for the colder months.",
            "promos/new-season",
        ),
        slide(
            "Free Shipping Over $75",
            "Every order over $75 ships free, no code needed.",
            "promos/free-shipping",
        ),
        slide(
            "Members Get 10% Off",
            "Create an account and save on your first order.",
            "promos/members",
        ),
        slide(
            "Weekend Flash Sale",
            "Up to 40% off selected electronics until Sunday.",
            "promos/flash-sale",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = Catalog::demo();
        assert!(catalog.validate().is_ok());
        assert!(catalog.products.len() >= 10);
    }

    #[test]
    fn test_validation_rejects_duplicate_ids() {
        let mut catalog = Catalog::demo();
        let dup = catalog.products[0].clone();
        catalog.products.push(dup);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_free_products() {
        let mut catalog = Catalog::demo();
        catalog.products[0].price = Money::zero();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_catalog_file_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(&Catalog::demo()).expect("serialize");
        fs::write(&path, json).expect("write");

        let loaded = Catalog::load_from_file(&path).expect("load");
        assert_eq!(loaded.products.len(), Catalog::demo().products.len());
    }

    #[test]
    fn test_promo_slides_present() {
        let slides = promo_slides();
        assert!(slides.len() >= 2);
        assert!(slides.iter().all(|s| !s.title.is_empty()));
    }
}

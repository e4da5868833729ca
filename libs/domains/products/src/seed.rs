//! Demo catalog written by the seeding routine.

use crate::models::Product;

const IMAGE_PARAMS: &str = "?q=80&w=1200&auto=format&fit=crop";

fn unsplash(photo_id: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo_id}{IMAGE_PARAMS}")
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The four products inserted into an empty catalog.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            title: "Minimalist Black Tee".to_string(),
            description: "Premium cotton tee with a tailored fit.".to_string(),
            price: 29.0,
            category: "tops".to_string(),
            in_stock: true,
            images: vec![unsplash("1512436991641-6745cdb1723f")],
            sizes: labels(&["S", "M", "L", "XL"]),
            colors: labels(&["black"]),
            tags: labels(&["minimal", "tee", "black"]),
        },
        Product {
            title: "Cream Overshirt".to_string(),
            description: "Structured overshirt with clean lines.".to_string(),
            price: 69.0,
            category: "outerwear".to_string(),
            in_stock: true,
            images: vec![unsplash("1520975922284-4bdf4a4cf7bd")],
            sizes: labels(&["S", "M", "L"]),
            colors: labels(&["cream"]),
            tags: labels(&["overshirt", "neutral"]),
        },
        Product {
            title: "Tapered Wool Trousers".to_string(),
            description: "Ankle length smart casual fit.".to_string(),
            price: 89.0,
            category: "bottoms".to_string(),
            in_stock: true,
            images: vec![unsplash("1490481651871-ab68de25d43d")],
            sizes: labels(&["28", "30", "32", "34"]),
            colors: labels(&["charcoal"]),
            tags: labels(&["trousers", "wool", "tapered"]),
        },
        Product {
            title: "White Leather Sneakers".to_string(),
            description: "Low-profile minimalist sneakers.".to_string(),
            price: 99.0,
            category: "footwear".to_string(),
            in_stock: true,
            images: vec![unsplash("1519741497674-611481863552")],
            sizes: labels(&["8", "9", "10", "11"]),
            colors: labels(&["white"]),
            tags: labels(&["sneakers", "leather", "white"]),
        },
    ]
}

use database::mongodb::Resource;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidateUrl, ValidationError};

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Free-form category label, e.g. `footwear`
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Image URLs, in display order
    #[serde(default)]
    #[validate(custom(function = "validate_image_urls"))]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_in_stock() -> bool {
    true
}

fn validate_image_urls(images: &[String]) -> Result<(), ValidationError> {
    if images.iter().all(|url| url.validate_url()) {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

/// A product as returned by the API: its fields plus the store-assigned `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "665f1c2e9b1e8a3d4c2b1a09")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub product: Product,
}

impl From<Resource<Product>> for ProductResponse {
    fn from(resource: Resource<Product>) -> Self {
        Self {
            id: resource.id,
            product: resource.record,
        }
    }
}

/// Query parameters for listing products.
///
/// Empty values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive substring of the title
    pub q: Option<String>,
    /// Exact category
    pub category: Option<String>,
}

impl ProductQuery {
    pub fn search_text(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedResult {
    /// Number of products written; 0 when the catalog was already populated
    pub inserted: u64,
}

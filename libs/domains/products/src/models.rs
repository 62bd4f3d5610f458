use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - a record stored in the JSON catalog file.
///
/// JSON field names are camelCase. `thumbnail` and `images` are never
/// recorded in tracing spans (client-supplied blobs of no diagnostic value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Product title
    pub title: String,
    /// Product description (max 100 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price, non-negative
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// DTO for creating or replacing a product.
///
/// Create and update both take the full record; update is a whole-record
/// replace, never a partial merge. A client-supplied `id` is accepted and
/// ignored: the store assigns ids on create and forces the path id on
/// update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Ignored; the store owns id assignment
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "Title is required."))]
    pub title: String,
    #[validate(length(max = 100, message = "Description length can't be more than 100."))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be greater than 0."))]
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl ProductDraft {
    /// Materialize into a stored product under the given id.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            discount_percentage: self.discount_percentage,
            rating: self.rating,
            stock: self.stock,
            brand: self.brand,
            category: self.category,
            thumbnail: self.thumbnail,
            images: self.images,
        }
    }
}

/// The full ordered collection of products as persisted in the storage file.
///
/// One JSON object with a `products` array; a missing key reads as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Next id to assign: max existing + 1, or 1 for an empty catalog.
    pub fn next_id(&self) -> i64 {
        self.products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }
}

/// Normalize a title or brand for the duplicate check: trim whitespace,
/// compare case-insensitively.
pub(crate) fn normalize(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_lowercase()
}

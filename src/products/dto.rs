use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::hal::HalResource;
use crate::products::repo_types::Product;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[schema(example = "Bamboo toothbrush")]
    pub name: String,
    #[schema(example = "Personal care")]
    pub category: String,
    #[schema(example = 2990.0)]
    pub price: f64,
    #[schema(example = 40)]
    pub stock: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Inclusive price bounds for `GET /api/products/price-between`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceRange {
    pub min_price: f64,
    pub max_price: f64,
}

impl HalResource for Product {
    const REL: &'static str = "products";
    const PATH: &'static str = "/api/products";

    fn id(&self) -> i64 {
        self.id
    }
}

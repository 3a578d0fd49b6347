use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub brand: String,
    pub price: i64,
    pub substitute: String,
}

impl Medicine {
    pub fn new(brand: &str, price: i64, substitute: &str) -> Self {
        Self {
            brand: brand.to_string(),
            price,
            substitute: substitute.to_string(),
        }
    }
}

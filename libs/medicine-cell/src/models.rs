use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparePricesRequest {
    pub medicine_name: Option<String>,
    pub strength: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformQuote {
    pub platform: String,
    pub price: i64,
    /// Percent.
    pub discount: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheapestOption {
    pub platform: String,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComparison {
    /// Echoed exactly as the caller spelled it.
    pub name: String,
    pub strength: Option<String>,
    pub brand: String,
    pub substitute: String,
    pub price_comparison: Vec<PlatformQuote>,
    pub cheapest_option: CheapestOption,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparePricesResponse {
    pub success: bool,
    pub medicine: PriceComparison,
}

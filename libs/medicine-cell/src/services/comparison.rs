use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{AppState, MemoryStore};
use shared_models::error::AppError;
use shared_models::medicine::Medicine;

use crate::models::{CheapestOption, PlatformQuote, PriceComparison};

struct PlatformRule {
    platform: &'static str,
    price_delta: i64,
    discount: u8,
}

const PLATFORMS: [PlatformRule; 3] = [
    PlatformRule { platform: "PharmEasy", price_delta: 0, discount: 10 },
    PlatformRule { platform: "NetMeds", price_delta: -20, discount: 15 },
    PlatformRule { platform: "1mg", price_delta: 10, discount: 5 },
];

pub struct PriceComparator {
    store: Arc<MemoryStore>,
}

impl PriceComparator {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    pub fn quotes(medicine: &Medicine) -> Vec<PlatformQuote> {
        PLATFORMS
            .iter()
            .map(|rule| PlatformQuote {
                platform: rule.platform.to_string(),
                price: medicine.price + rule.price_delta,
                discount: rule.discount,
            })
            .collect()
    }

    /// Lowest price in `quotes`; the earlier platform wins a tie.
    pub fn cheapest(quotes: &[PlatformQuote]) -> Option<CheapestOption> {
        quotes
            .iter()
            .min_by_key(|quote| quote.price)
            .map(|quote| CheapestOption {
                platform: quote.platform.clone(),
                price: quote.price,
            })
    }

    pub fn compare(&self, name: &str, strength: Option<String>) -> Result<PriceComparison, AppError> {
        debug!("Comparing prices for '{}'", name);

        let medicine = self
            .store
            .find_medicine(name)
            .ok_or_else(|| AppError::NotFound("Medicine not found".to_string()))?;

        let quotes = Self::quotes(medicine);
        let cheapest = Self::cheapest(&quotes)
            .ok_or_else(|| AppError::Internal("No platform quotes generated".to_string()))?;

        info!("Cheapest '{}' is {} at {}", name, cheapest.platform, cheapest.price);

        Ok(PriceComparison {
            name: name.to_string(),
            strength,
            brand: medicine.brand.clone(),
            substitute: medicine.substitute.clone(),
            price_comparison: quotes,
            cheapest_option: cheapest,
        })
    }
}

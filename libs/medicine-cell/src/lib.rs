pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use router::medicine_routes;
pub use services::PriceComparator;

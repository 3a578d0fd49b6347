pub mod comparison;

pub use comparison::PriceComparator;

pub mod analyzer;

pub use analyzer::SymptomAnalyzer;

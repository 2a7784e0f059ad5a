//! Core conversion logic, independent of any UI

pub mod config;
pub mod currency;
pub mod engine;
pub mod error;
pub mod input;
pub mod log;
pub mod rates;
pub mod screen;

// Re-export main types for cleaner imports
pub use currency::CurrencyCode;
pub use engine::{ConversionEngine, ConversionRequest, ConversionResult};
pub use error::ConvertError;
pub use rates::RateTable;
pub use screen::ConverterScreen;

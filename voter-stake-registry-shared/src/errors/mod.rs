//! Error types for the shared account model.
mod conversion;

pub use conversion::ConversionError;

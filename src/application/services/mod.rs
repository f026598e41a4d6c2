mod conversion_service;

pub use conversion_service::{ConversionError, ConversionService, OUTPUT_FILE_NAME};

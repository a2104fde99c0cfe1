pub mod path_scanner;
pub mod prompt;
pub mod result_writer;
pub mod translation_service;

pub use path_scanner::PathScanner;
pub use result_writer::ResultWriter;
pub use translation_service::{AzureTranslator, Translator};

//! File discovery and content aggregation

pub mod aggregate;
mod file_scanner;
mod gitignore;

pub use file_scanner::FileScanner;
pub use gitignore::GitIgnoreFilter;

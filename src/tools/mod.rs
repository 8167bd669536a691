mod extension;
mod file_scanner;
mod path_validator;

pub use extension::{EXTENSION_SEPARATOR, extract_extension, match_extension};
pub use file_scanner::{FileInfo, walk_files};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};

//! Domain constants: recognized descriptor file suffixes.

/// Suffix of type-system descriptor files (items, enums, relations, ...).
pub const ITEMS_DESCRIPTOR_SUFFIX: &str = "-items.xml";

/// Suffix of bean/DTO descriptor files.
pub const BEANS_DESCRIPTOR_SUFFIX: &str = "-beans.xml";

/// All descriptor suffixes recognized by the engine.
pub const DESCRIPTOR_SUFFIXES: [&str; 2] = [ITEMS_DESCRIPTOR_SUFFIX, BEANS_DESCRIPTOR_SUFFIX];

/// Returns true if the given file name matches any recognized descriptor suffix.
pub fn is_descriptor_file(file_name: &str) -> bool {
    DESCRIPTOR_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

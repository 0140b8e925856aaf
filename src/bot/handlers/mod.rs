//! Discord interaction handlers that are not commands themselves.

/// Autocomplete providers for command parameters
pub mod autocomplete;

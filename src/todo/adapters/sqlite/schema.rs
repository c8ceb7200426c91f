//! Diesel schema for todo persistence.

diesel::table! {
    /// Stored todo records.
    todos (id) {
        /// Storage-assigned identifier.
        id -> BigInt,
        /// Short free-form summary.
        title -> Text,
        /// Longer free-form detail text.
        description -> Text,
    }
}

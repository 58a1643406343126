//!
//! Dotted: dot-notation access to nested data.
//! This library provides a uniform addressing scheme for deeply nested lists
//! and maps (`"user.address.city"`) and the accessor, mutation, filtering,
//! sorting and membership operations built on it.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A recursive sum type of scalars, ordered lists and insertion-ordered maps.
//! * **Keys (`value::Key`)**: Integer or string keys; canonical integer strings such as `"3"` are integer keys.
//! * **Paths (`path`)**: Strings of `.`-separated segments, one segment per nesting level. The path engine provides:
//!     * **Flattening (`path::dot`, `path::undot`)**: Conversion between nested values and single-level dotted maps.
//!     * **Access (`path::get`, `path::has`)**: Read access with a literal-key fast path.
//!     * **Mutation (`path::set`, `path::forget`)**: In-place writes that create intermediate maps, and removals.
//! * **Projection (`filter`)**: Key and value filters, plucking, renaming and reordering.
//! * **Sorting (`sort`)**: Column sorts over lists of maps.
//! * **Membership (`members`)**: Value-set queries over flattened data and keyed de-duplication.
//! * **Query strings (`query`)**: RFC 3986 encoding with bracket notation for nested keys.
//! * **Sampling (`random`)**: Random selection with an injectable generator.
//!
//! ## Example
//!
//! ```
//! use dotted::{Value, path};
//!
//! let mut config = Value::empty_map();
//! path::set(&mut config, "db.primary.host", "localhost")?;
//! path::set(&mut config, "db.primary.port", 5432)?;
//!
//! assert_eq!(path::get(&config, "db.primary.port"), Some(&Value::Int(5432)));
//! assert!(path::has(&config, "db.primary"));
//!
//! let flat = path::dot(&config, "");
//! assert_eq!(flat.len(), 2);
//! assert_eq!(path::undot(&flat), config);
//! # Ok::<(), dotted::Error>(())
//! ```

pub mod filter;
pub mod members;
pub mod path;
pub mod query;
pub mod random;
pub mod sort;
pub mod value;

/// Re-export the core value types for easier access.
pub use value::{Key, Map, Value, ValueError};

/// Result type used throughout the dotted library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotted library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured value errors from the value module
    #[error(transparent)]
    Value(value::ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a type-constraint violation.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::Value(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error came from (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}

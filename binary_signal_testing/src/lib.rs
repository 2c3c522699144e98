//! Fixtures and helpers for exercising the `binary_signal` codec in tests.
//!
//! ```rust
//! use binary_signal::encode;
//! use binary_signal_testing::{WireBuilder, sample_message};
//!
//! let expected = WireBuilder::new(3)
//!     .header("Header1", "Value1")
//!     .header("Header2", "Value2")
//!     .header("Header3", "Value3")
//!     .payload(b"PayloadData")
//!     .build();
//! assert_eq!(encode(&sample_message()).unwrap().as_ref(), expected.as_slice());
//! ```

pub mod fixtures;
pub mod macros;
pub mod wire;

pub use fixtures::{
    empty_header_message,
    max_size_message,
    message_with_header_count,
    sample_message,
};
pub use wire::WireBuilder;

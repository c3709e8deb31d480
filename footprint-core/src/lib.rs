//! Storage footprint of ranked tensor types.
//!
//! Given an element type and a static shape, computes how many bytes one
//! element takes (as a ratio, for sub-byte packed types) and how many whole
//! bytes the densely packed tensor takes.

pub mod error;
pub mod layout;
pub mod packing;
pub mod types;

#[doc(hidden)]
pub mod test_utils;

pub use error::{ErrorKind, FootprintError, Result};
pub use layout::{Layout, RankedTensorType};
pub use packing::{get_element_size, get_num_elements, get_num_packed_bytes};
pub use types::{ElementType, Ratio};

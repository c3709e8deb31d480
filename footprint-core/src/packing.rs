use num_traits::ToPrimitive;

use crate::error::{FootprintError, Result};
use crate::layout::RankedTensorType;
use crate::types::{ElementType, Ratio};

/// Returns the storage size of one element of `element_type`, in bytes per element.
///
/// Sub-byte types report a denominator above one (`Int4` is `1/2`).
///
/// # Errors
/// Returns `FootprintError::InvalidArgument` for element types without a fixed
/// storage size (`None`, `TfResource`, `TfString`, `TfVariant`).
///
/// # Example
/// ```
/// use footprint_core::{get_element_size, ElementType, Ratio};
/// assert_eq!(get_element_size(ElementType::Int4).unwrap(), Ratio::new(1, 2));
/// assert_eq!(get_element_size(ElementType::Float32).unwrap(), Ratio::new(4, 1));
/// ```
pub fn get_element_size(element_type: ElementType) -> Result<Ratio> {
    match element_type {
        ElementType::Int4 => Ok(Ratio::new(1, 2)),
        ElementType::Bool => Ok(Ratio::new(1, 1)),
        ElementType::Int8 | ElementType::UInt8 => Ok(Ratio::new(1, 1)),
        ElementType::Int16
        | ElementType::UInt16
        | ElementType::Float16
        | ElementType::BFloat16 => Ok(Ratio::new(2, 1)),
        ElementType::Int32 | ElementType::UInt32 | ElementType::Float32 => Ok(Ratio::new(4, 1)),
        ElementType::Int64 | ElementType::UInt64 | ElementType::Float64 => Ok(Ratio::new(8, 1)),
        ElementType::Complex64 => Ok(Ratio::new(16, 1)),
        ElementType::Complex128 => Ok(Ratio::new(32, 1)),
        ElementType::None
        | ElementType::TfResource
        | ElementType::TfString
        | ElementType::TfVariant => {
            log::debug!("No fixed storage size for element type {}", element_type);
            Err(FootprintError::invalid_argument(format!(
                "Unexpected element type {}",
                element_type
            )))
        }
    }
}

/// Returns the number of elements of a ranked tensor type.
///
/// Dimensions are checked in declared order and the first invalid one is
/// reported. A rank-0 layout has exactly one element.
///
/// # Errors
/// - `FootprintError::InvalidArgument` for a negative (dynamic) or zero dimension.
/// - `FootprintError::Overflow` if the product does not fit in `usize`.
pub fn get_num_elements(tensor_type: &RankedTensorType) -> Result<usize> {
    let mut num_elements: usize = 1;
    for (index, &dim) in tensor_type.layout.dimensions().iter().enumerate() {
        if dim < 0 {
            log::debug!("Dimension {} is dynamic ({})", index, dim);
            return Err(FootprintError::invalid_argument(
                "Unexpected dynamic tensor passed as input",
            ));
        } else if dim == 0 {
            log::debug!("Dimension {} is zero", index);
            return Err(FootprintError::invalid_argument(
                "Unexpected 0 tensor dimension",
            ));
        }
        let dim = dim
            .to_usize()
            .ok_or_else(|| FootprintError::overflow(format!("converting dimension {} to usize", dim)))?;
        num_elements = num_elements.checked_mul(dim).ok_or_else(|| {
            FootprintError::overflow(format!(
                "element count of {:?} at dimension {}",
                tensor_type.layout.dimensions(),
                index
            ))
        })?;
    }
    Ok(num_elements)
}

/// Returns the number of whole bytes needed to store a densely packed tensor.
///
/// The element size is resolved before the layout is inspected, so an invalid
/// element type is reported even when the layout is invalid too. Errors from
/// either step are returned unchanged.
///
/// # Example
/// ```
/// use footprint_core::{get_num_packed_bytes, ElementType, RankedTensorType};
/// // three 4-bit values need two bytes
/// let t = RankedTensorType::new(ElementType::Int4, vec![3]);
/// assert_eq!(get_num_packed_bytes(&t).unwrap(), 2);
/// ```
pub fn get_num_packed_bytes(tensor_type: &RankedTensorType) -> Result<usize> {
    let element_size = get_element_size(tensor_type.element_type)?;
    let num_elements = get_num_elements(tensor_type)?;
    let num_bytes = element_size.packed_bytes(num_elements)?;
    log::trace!(
        "{} x {:?}: {} elements at {} bytes each -> {} bytes",
        tensor_type.element_type,
        tensor_type.layout.dimensions(),
        num_elements,
        element_size,
        num_bytes
    );
    Ok(num_bytes)
}

// --- Tests ---
#[cfg(test)]
#[path = "packing_test.rs"]
mod tests;

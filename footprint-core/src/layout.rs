use crate::error::Result;
use crate::types::ElementType;

/// Shape of a ranked tensor: dimensions in declared order, plus optional strides.
///
/// Dimensions are signed because the model format stores a dynamic
/// (not yet resolved) dimension as a negative value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Layout {
    dimensions: Vec<i32>,
    /// Per-dimension strides in elements. Metadata only: the packed size
    /// always describes the dense tensor.
    strides: Option<Vec<u32>>,
}

impl Layout {
    pub fn new(dimensions: Vec<i32>) -> Self {
        Layout {
            dimensions,
            strides: None,
        }
    }

    /// Creates a layout carrying explicit strides.
    ///
    /// Returns `None` when `strides` does not have one entry per dimension.
    pub fn with_strides(dimensions: Vec<i32>, strides: Vec<u32>) -> Option<Self> {
        if strides.len() != dimensions.len() {
            return None;
        }
        Some(Layout {
            dimensions,
            strides: Some(strides),
        })
    }

    /// Layout of a rank-0 (scalar) tensor.
    pub fn scalar() -> Self {
        Layout::default()
    }

    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    pub fn dimensions(&self) -> &[i32] {
        &self.dimensions
    }

    pub fn strides(&self) -> Option<&[u32]> {
        self.strides.as_deref()
    }

    pub fn has_strides(&self) -> bool {
        self.strides.is_some()
    }
}

impl From<Vec<i32>> for Layout {
    fn from(dimensions: Vec<i32>) -> Self {
        Layout::new(dimensions)
    }
}

impl From<&[i32]> for Layout {
    fn from(dimensions: &[i32]) -> Self {
        Layout::new(dimensions.to_vec())
    }
}

/// An element type paired with a layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedTensorType {
    pub element_type: ElementType,
    pub layout: Layout,
}

impl RankedTensorType {
    pub fn new(element_type: ElementType, layout: impl Into<Layout>) -> Self {
        RankedTensorType {
            element_type,
            layout: layout.into(),
        }
    }

    pub fn rank(&self) -> usize {
        self.layout.rank()
    }

    /// See [`crate::get_num_elements`].
    pub fn num_elements(&self) -> Result<usize> {
        crate::packing::get_num_elements(self)
    }

    /// See [`crate::get_num_packed_bytes`].
    pub fn num_packed_bytes(&self) -> Result<usize> {
        crate::packing::get_num_packed_bytes(self)
    }
}

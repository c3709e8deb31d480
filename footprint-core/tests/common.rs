use footprint_core::{ElementType, RankedTensorType};
use rand::Rng;
use std::sync::Once;

// Helper to initialize logger only once for all tests in this binary
static LOGGER_INIT: Once = Once::new();

#[allow(dead_code)]
pub fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        // Already initialized by another test harness is fine.
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Element types that have a fixed storage size.
#[allow(dead_code)]
pub fn sized_element_types() -> Vec<ElementType> {
    ElementType::ALL
        .iter()
        .copied()
        .filter(|t| {
            !matches!(
                t,
                ElementType::None
                    | ElementType::TfResource
                    | ElementType::TfString
                    | ElementType::TfVariant
            )
        })
        .collect()
}

/// Random static shape with rank in `0..=max_rank` and dimensions in `1..=max_dim`.
#[allow(dead_code)]
pub fn random_static_dims<R: Rng>(rng: &mut R, max_rank: usize, max_dim: i32) -> Vec<i32> {
    let rank = rng.gen_range(0..=max_rank);
    (0..rank).map(|_| rng.gen_range(1..=max_dim)).collect()
}

#[allow(dead_code)]
pub fn ranked(element_type: ElementType, dims: &[i32]) -> RankedTensorType {
    RankedTensorType::new(element_type, dims)
}

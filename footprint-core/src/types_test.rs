use super::*;
use crate::error::ErrorKind;

#[test]
fn test_raw_tags_match_model_format() {
    assert_eq!(ElementType::None.raw(), 0);
    assert_eq!(ElementType::Float32.raw(), 1);
    assert_eq!(ElementType::Int32.raw(), 2);
    assert_eq!(ElementType::UInt8.raw(), 3);
    assert_eq!(ElementType::Int64.raw(), 4);
    assert_eq!(ElementType::TfString.raw(), 5);
    assert_eq!(ElementType::Bool.raw(), 6);
    assert_eq!(ElementType::Int16.raw(), 7);
    assert_eq!(ElementType::Complex64.raw(), 8);
    assert_eq!(ElementType::Int8.raw(), 9);
    assert_eq!(ElementType::Float16.raw(), 10);
    assert_eq!(ElementType::Float64.raw(), 11);
    assert_eq!(ElementType::Complex128.raw(), 12);
    assert_eq!(ElementType::UInt64.raw(), 13);
    assert_eq!(ElementType::TfVariant.raw(), 15);
    assert_eq!(ElementType::UInt32.raw(), 16);
    assert_eq!(ElementType::UInt16.raw(), 17);
    assert_eq!(ElementType::Int4.raw(), 18);
    assert_eq!(ElementType::BFloat16.raw(), 19);
    assert_eq!(ElementType::TfResource.raw(), 20);
}

#[test]
fn test_from_raw_decodes_every_variant() -> Result<()> {
    for element_type in ElementType::ALL {
        assert_eq!(ElementType::from_raw(element_type.raw())?, element_type);
        assert_eq!(ElementType::try_from(element_type.raw())?, element_type);
    }
    Ok(())
}

#[test]
fn test_from_raw_unknown_tag() {
    for tag in [14u32, 21, 999, u32::MAX] {
        let err = ElementType::from_raw(tag).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains(&tag.to_string()));
    }
}

#[test]
fn test_display_names() {
    assert_eq!(ElementType::Int4.to_string(), "int4");
    assert_eq!(ElementType::BFloat16.to_string(), "bfloat16");
    assert_eq!(ElementType::TfString.to_string(), "tf_string");
    assert_eq!(Ratio::new(1, 2).to_string(), "1/2");
}

#[test]
fn test_ratio_packed_bytes_rounds_up() -> Result<()> {
    let half = Ratio::new(1, 2);
    assert_eq!(half.packed_bytes(1)?, 1);
    assert_eq!(half.packed_bytes(3)?, 2);
    assert_eq!(half.packed_bytes(4)?, 2);

    let four = Ratio::new(4, 1);
    assert_eq!(four.packed_bytes(6)?, 24);
    assert_eq!(four.packed_bytes(0)?, 0);
    Ok(())
}

#[test]
fn test_ratio_packed_bytes_overflow() {
    let err = Ratio::new(8, 1).packed_bytes(usize::MAX / 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);

    // product fits, rounding step does not
    let err = Ratio::new(1, 2).packed_bytes(usize::MAX).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
fn test_ratio_zero_denominator() {
    let err = Ratio::new(1, 0).packed_bytes(4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

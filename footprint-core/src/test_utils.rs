/// Asserts that `$result` is an `Err` whose kind is `$kind`, and optionally that its
/// message equals `$message`.
#[macro_export]
macro_rules! assert_error_kind {
    ($result:expr, $kind:expr, message = $message:expr) => {
        {
            match $result {
                Ok(value) => panic!(
                    "assertion failed: expected error of kind {:?}, got Ok({:?})",
                    $kind, value
                ),
                Err(err) => {
                    assert_eq!(err.kind(), $kind, "error kind mismatch for `{}`", err);
                    assert_eq!(err.message(), $message, "error message mismatch");
                }
            }
        }
    };
    ($result:expr, $kind:expr) => {
        {
            match $result {
                Ok(value) => panic!(
                    "assertion failed: expected error of kind {:?}, got Ok({:?})",
                    $kind, value
                ),
                Err(err) => assert_eq!(err.kind(), $kind, "error kind mismatch for `{}`", err),
            }
        }
    };
}

//! Error macros for graphwalk

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a malformed graph document
#[macro_export]
macro_rules! bail_document {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphError::invalid_document(format!($($arg)*)))
    };
}

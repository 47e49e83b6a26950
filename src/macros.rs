//===========================================================================//

macro_rules! format_err {
    ($e:expr) => {
        return Err($crate::IcoError::Format($e.to_string()))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::IcoError::Format(format!($fmt, $($arg)+)))
    };
}

macro_rules! truncated_err {
    ($e:expr) => {
        return Err($crate::IcoError::Truncated($e.to_string()))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::IcoError::Truncated(format!($fmt, $($arg)+)))
    };
}

macro_rules! unsupported_err {
    ($e:expr) => {
        return Err($crate::IcoError::Unsupported($e.to_string()))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::IcoError::Unsupported(format!($fmt, $($arg)+)))
    };
}

//===========================================================================//

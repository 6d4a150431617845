#[cfg(feature = "tracing")]
macro_rules! ntrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "bottom_nav", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ntrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ndebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "bottom_nav", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ndebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! nwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "bottom_nav", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! nwarn {
    ($($tt:tt)*) => {};
}

//! Failure events.
//!
//! With the `tracing` feature enabled every reported [`Error`](crate::Error) is also
//! emitted as a `tracing::debug!` event carrying the same fields. Without the
//! feature the macro expands to nothing.

macro_rules! trace_failure {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(target: "slotted", $($arg)+);
        }
    };
}

pub(crate) use trace_failure;

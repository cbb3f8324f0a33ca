//! Formatting macros over the shared logger.

/// Emit a formatted message at the given severity on the shared logger.
///
/// ```rust,ignore
/// chirp_core::log!(chirp_core::Severity::Info, "user {} logged in", id);
/// ```
#[macro_export]
macro_rules! log {
    ($severity:expr, $($arg:tt)+) => {
        $crate::global().emit_fmt($severity, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Error, $($arg)+) };
}

/// Emit at fatal on the shared logger; the process exits afterwards.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Fatal, $($arg)+) };
}

/// Build an [`Attachments`](crate::Attachments) set from `key => value` pairs.
#[macro_export]
macro_rules! attachments {
    () => {
        $crate::Attachments::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attachments = $crate::Attachments::new();
        $(attachments.insert($key, $value);)+
        attachments
    }};
}

//! Process termination after fatal records.

/// Exit status used after a fatal record.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Called once a fatal record has been written.
///
/// The production implementation never returns. Test doubles may record the
/// call and return, in which case the logging call returns normally.
pub trait Terminate: Send + Sync {
    fn terminate(&self, code: i32);
}

/// Terminates the current process with `std::process::exit`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}

impl<T: Terminate + ?Sized> Terminate for std::sync::Arc<T> {
    fn terminate(&self, code: i32) {
        (**self).terminate(code);
    }
}

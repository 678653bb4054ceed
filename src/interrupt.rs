//! Per-thread interrupted flag.
//!
//! Rust threads carry no interruption status of their own, so the flag lives
//! in a thread local. Long running code can poll it with [`is_interrupted`]
//! and bail out with [`crate::Interrupted`]; `Try`'s capture factories set it
//! again whenever they turn an `Interrupted` error into a failure.

use std::cell::Cell;

use log::debug;

thread_local! {
    static INTERRUPTED: Cell<bool> = Cell::new(false);
}

/// Sets the interrupted flag of the current thread.
pub fn interrupt() {
    INTERRUPTED.with(|flag| flag.set(true));
}

/// Checks the flag without clearing it.
pub fn is_interrupted() -> bool {
    INTERRUPTED.with(|flag| flag.get())
}

/// Returns the flag and clears it.
pub fn interrupted() -> bool {
    INTERRUPTED.with(|flag| flag.replace(false))
}

/// Sets the flag again if `err` carries an `Interrupted` anywhere in its chain.
pub(crate) fn restore_if_interrupted(err: &anyhow::Error) {
    if err.chain().any(|cause| cause.is::<crate::Interrupted>()) {
        debug!("interrupt::restore_if_interrupted - re-flagging current thread");
        interrupt();
    }
}

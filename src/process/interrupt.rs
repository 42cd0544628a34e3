//! Keeps the launcher alive through Ctrl+C while the child is running.
//!
//! The handler only records the signal. `exec` resets caught signals to their
//! default action, so the child still receives and handles SIGINT itself.
//! Only one guard exists at a time; `install` blocks until the previous one
//! is dropped.

#[cfg(unix)]
mod imp {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

    static INTERRUPTED: AtomicBool = AtomicBool::new(false);
    static INSTALLED: Mutex<()> = Mutex::new(());

    fn lock() -> MutexGuard<'static, ()> {
        INSTALLED.lock().unwrap_or_else(PoisonError::into_inner)
    }

    extern "C" fn record_interrupt(_: nix::libc::c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    pub struct InterruptGuard {
        previous: SigAction,
        // Released after `drop` has restored `previous`.
        _installed: MutexGuard<'static, ()>,
    }

    impl InterruptGuard {
        pub fn install() -> nix::Result<Self> {
            let installed = lock();
            INTERRUPTED.store(false, Ordering::SeqCst);
            let action = SigAction::new(
                SigHandler::Handler(record_interrupt),
                SaFlags::SA_RESTART,
                SigSet::empty(),
            );
            // SAFETY: the handler only touches an atomic.
            let previous = unsafe { sigaction(Signal::SIGINT, &action) }?;
            Ok(Self {
                previous,
                _installed: installed,
            })
        }

        pub fn interrupted(&self) -> bool {
            INTERRUPTED.load(Ordering::SeqCst)
        }
    }

    impl Drop for InterruptGuard {
        fn drop(&mut self) {
            // SAFETY: restores the disposition returned by `install`.
            if let Err(err) = unsafe { sigaction(Signal::SIGINT, &self.previous) } {
                tracing::warn!("failed to restore SIGINT handler: {}", err);
            }
        }
    }

    /// Current SIGINT handler, read while no guard is installed.
    #[cfg(test)]
    pub(super) fn current_handler() -> SigHandler {
        let _installed = lock();
        let reset = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
        // SAFETY: the previous action is put back immediately.
        let previous = unsafe { sigaction(Signal::SIGINT, &reset) }.unwrap();
        unsafe { sigaction(Signal::SIGINT, &previous) }.unwrap();
        previous.handler()
    }
}

#[cfg(not(unix))]
mod imp {
    use std::convert::Infallible;

    pub struct InterruptGuard;

    impl InterruptGuard {
        pub fn install() -> Result<Self, Infallible> {
            Ok(Self)
        }

        pub fn interrupted(&self) -> bool {
            false
        }
    }
}

pub use imp::InterruptGuard;

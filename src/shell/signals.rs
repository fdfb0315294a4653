//! Signal handling while a child runs.
//!
//! The terminal already delivers `SIGINT`/`SIGQUIT` to the whole foreground
//! process group, so ny ignores them and lets the child decide. `SIGTERM`
//! and `SIGHUP` aimed at ny alone are forwarded to the child. Either way ny
//! keeps waiting and exits with whatever code the child ends with.

#[cfg(unix)]
mod imp {
    use std::sync::atomic::{AtomicI32, Ordering};

    static CHILD_PID: AtomicI32 = AtomicI32::new(0);

    const IGNORED: [libc::c_int; 2] = [libc::SIGINT, libc::SIGQUIT];
    const FORWARDED: [libc::c_int; 2] = [libc::SIGTERM, libc::SIGHUP];

    extern "C" fn forward(signal: libc::c_int) {
        let pid = CHILD_PID.load(Ordering::SeqCst);
        if pid > 0 {
            // SAFETY: kill(2) is async-signal-safe
            unsafe {
                libc::kill(pid, signal);
            }
        }
    }

    /// Installs the handlers for the lifetime of one child.
    ///
    /// Dropping the guard restores the previous handlers. Only one child
    /// runs at a time, so guards never overlap in ny itself.
    pub struct SignalGuard {
        previous: Vec<(libc::c_int, libc::sighandler_t)>,
    }

    impl SignalGuard {
        /// Start forwarding signals to `pid`.
        pub fn install(pid: u32) -> Self {
            CHILD_PID.store(pid as i32, Ordering::SeqCst);

            let handler = forward as extern "C" fn(libc::c_int) as libc::sighandler_t;
            let mut previous = Vec::with_capacity(IGNORED.len() + FORWARDED.len());

            for signal in IGNORED {
                // SAFETY: SIG_IGN is a valid disposition for these signals
                let old = unsafe { libc::signal(signal, libc::SIG_IGN) };
                previous.push((signal, old));
            }
            for signal in FORWARDED {
                // SAFETY: `forward` only touches an atomic and calls kill(2)
                let old = unsafe { libc::signal(signal, handler) };
                previous.push((signal, old));
            }

            Self { previous }
        }
    }

    impl Drop for SignalGuard {
        fn drop(&mut self) {
            for (signal, old) in self.previous.drain(..).rev() {
                if old != libc::SIG_ERR {
                    // SAFETY: restoring a disposition previously returned by signal(2)
                    unsafe {
                        libc::signal(signal, old);
                    }
                }
            }
            CHILD_PID.store(0, Ordering::SeqCst);
        }
    }

}

#[cfg(not(unix))]
mod imp {
    /// No-op on platforms without POSIX signals.
    pub struct SignalGuard;

    impl SignalGuard {
        /// Nothing to install.
        pub fn install(_pid: u32) -> Self {
            SignalGuard
        }
    }
}

pub use imp::SignalGuard;

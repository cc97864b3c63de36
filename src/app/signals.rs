use std::io;
use std::os::raw::c_int;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use signal_hook::consts::TERM_SIGNALS;

/// Signals that end the display loop: the termination set plus hangup,
/// so closing the controlling terminal still restores it cleanly.
#[cfg(unix)]
pub fn quit_signals() -> Vec<c_int> {
    let mut signals = TERM_SIGNALS.to_vec();
    signals.push(signal_hook::consts::SIGHUP);
    signals
}

#[cfg(not(unix))]
pub fn quit_signals() -> Vec<c_int> {
    TERM_SIGNALS.to_vec()
}

/// Set `flag` when any of [`quit_signals`] arrives.
pub fn register_quit_flag(flag: &Arc<AtomicBool>) -> io::Result<()> {
    for signal in quit_signals() {
        signal_hook::flag::register(signal, Arc::clone(flag))?;
    }
    Ok(())
}

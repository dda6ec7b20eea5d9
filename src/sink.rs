//! Output sink capability check.
//!
//! Resolved once at startup into [`AnsiSupport`] so the renderer never branches on the host
//! platform.

use tracing::debug;

use crate::config::AnsiSupport;

/// Reports whether standard output interprets ANSI color sequences.
///
/// On Windows this tries to switch the console into virtual terminal mode. A console that refuses
/// is [`AnsiSupport::Translated`]. A handle that is not a console (a pipe or a file) receives the
/// escape sequences unchanged.
pub fn detect_ansi_support() -> AnsiSupport {
    let support = if enable_virtual_terminal() {
        AnsiSupport::Native
    } else {
        AnsiSupport::Translated
    };
    debug!(?support, "detected stdout color support");
    support
}

#[cfg(not(windows))]
fn enable_virtual_terminal() -> bool {
    true
}

#[cfg(windows)]
fn enable_virtual_terminal() -> bool {
    use windows::Win32::System::Console::{
        GetConsoleMode, GetStdHandle, SetConsoleMode, CONSOLE_MODE,
        ENABLE_VIRTUAL_TERMINAL_PROCESSING, STD_OUTPUT_HANDLE,
    };

    // SAFETY: the handle comes straight from GetStdHandle and `mode` outlives both calls.
    unsafe {
        let Ok(handle) = GetStdHandle(STD_OUTPUT_HANDLE) else {
            return true;
        };
        let mut mode = CONSOLE_MODE(0);
        if GetConsoleMode(handle, &mut mode).is_err() {
            // Redirected.
            return true;
        }
        if mode.contains(ENABLE_VIRTUAL_TERMINAL_PROCESSING) {
            return true;
        }
        match SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) {
            Ok(()) => true,
            Err(e) => {
                debug!("SetConsoleMode failed: {:?}", e);
                false
            }
        }
    }
}

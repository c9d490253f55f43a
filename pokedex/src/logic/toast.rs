//! Toast notification module
//!
//! Provides toast notification functionality with different status types
//! and automatic timeout management.

use crate::{
    global_util,
    slint_generatedAppWindow::{AppWindow, ToastSetting, ToastStatus},
};
use slint::{ComponentHandle, Timer, TimerMode, Weak};

/// Macro to show warning toast notification
///
/// # Parameters
/// - `$ui`: AppWindow instance
/// - `$msg`: Warning message
#[macro_export]
macro_rules! toast_warn {
    ($ui:expr, $msg:expr) => {
        $ui.global::<$crate::slint_generatedAppWindow::Util>()
            .invoke_show_toast(
                slint::format!("{}", $msg),
                $crate::slint_generatedAppWindow::ToastStatus::Warning,
            )
    };
}

/// Shows error toast notification asynchronously
///
/// # Parameters
/// - `ui`: Weak reference to the application window
/// - `msg`: Error message
pub fn async_toast_error(ui: Weak<AppWindow>, msg: String) {
    let _ = slint::invoke_from_event_loop(move || {
        if let Some(ui) = ui.upgrade() {
            global_util!(ui).invoke_show_toast(slint::format!("{}", msg), ToastStatus::Error);
        }
    });
}

/// Seconds a toast stays up. Long messages get more time to be read.
fn toast_interval(msg: &str) -> u64 {
    if msg.chars().count() > 20 { 5 } else { 2 }
}

/// Initializes toast notification functionality
///
/// Sets up the toast callback with automatic timeout management.
///
/// # Parameters
/// - `ui`: Reference to the application window
pub fn init(ui: &AppWindow) {
    let timer = Timer::default();
    let ui_weak = ui.as_weak();
    global_util!(ui).on_show_toast(move |msg, status| {
        let ui = ui_weak.unwrap();

        if timer.running() {
            timer.stop();
        }

        let interval = toast_interval(&msg);
        log::debug!("toast {status:?}: {msg}");

        ui.global::<ToastSetting>().set_is_timeout(false);
        ui.global::<ToastSetting>().invoke_set(msg, status);

        timer.start(
            TimerMode::SingleShot,
            std::time::Duration::from_secs(interval),
            move || {
                ui.global::<ToastSetting>().set_is_timeout(true);
            },
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_interval() {
        assert_eq!(2, toast_interval("Pokémon x not found."));
        assert_eq!(5, toast_interval("Error fetching evolution data: timeout"));
    }
}

//! UI logic and callback management module
//!
//! Contains macros and initialization functions for connecting Slint UI callbacks
//! to Rust functions. Provides global access to UI components and utilities.

use crate::slint_generatedAppWindow::AppWindow;

mod about;
mod search;
mod sprite;
mod toast;
mod util;

/// Macro to access the global Store component
///
/// # Parameters
/// - `$ui`: AppWindow instance
///
/// # Returns
/// - Reference to the global Store component
#[macro_export]
macro_rules! global_store {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Store>()
    };
}

/// Macro to access the global Logic component
///
/// # Parameters
/// - `$ui`: AppWindow instance
///
/// # Returns
/// - Reference to the global Logic component
#[macro_export]
macro_rules! global_logic {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Logic>()
    };
}

/// Macro to access the global Util component
///
/// # Parameters
/// - `$ui`: AppWindow instance
///
/// # Returns
/// - Reference to the global Util component
#[macro_export]
macro_rules! global_util {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Util>()
    };
}

/// Macro to connect Slint callbacks to Rust functions
///
/// Creates a callback connection with proper weak reference handling
/// to prevent memory leaks.
///
/// # Parameters
/// - `$callback_name`: Name of the callback function
/// - `$ui`: AppWindow instance
/// - `$($arg:ident),*`: Callback arguments
#[macro_export]
macro_rules! logic_cb {
    ($callback_name:ident, $ui:expr, $($arg:ident),*) => {
        {{
            let ui_weak = $ui.as_weak();
            paste::paste! {
                crate::global_logic!($ui)
                    .[<on_ $callback_name>](move |$($arg),*| {
                        $callback_name(&ui_weak.unwrap(), $($arg),*)
                    });
            }
        }}
    };
    ($callback_name:ident, $ui:expr) => {
        {{
            let ui_weak = $ui.as_weak();
            paste::paste! {
                crate::global_logic!($ui)
                    .[<on_ $callback_name>](move || {
                        $callback_name(&ui_weak.unwrap())
                    });
            }
        }}
    };
}

/// Initializes all UI logic modules
///
/// # Parameters
/// - `ui`: Reference to the application window
pub fn init(ui: &AppWindow) {
    util::init(ui);
    about::init(ui);
    toast::init(ui);
    search::init(ui);
}

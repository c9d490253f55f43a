//! About information shown in the window title.

use crate::slint_generatedAppWindow::{AboutSetting, AppWindow};
use crate::{config, version::VERSION};
use slint::ComponentHandle;

/// Sets the application name and version.
///
/// # Parameters
/// - `ui`: Reference to the application window
pub fn init(ui: &AppWindow) {
    let app_name = config::all().app_name;

    ui.global::<AboutSetting>().set_app_name(
        if app_name.is_empty() {
            "pokedex".to_string()
        } else {
            app_name
        }
        .into(),
    );

    ui.global::<AboutSetting>().set_version(
        if VERSION.is_empty() {
            "v0.0.1".to_string()
        } else {
            format!("v{VERSION}")
        }
        .into(),
    );
}

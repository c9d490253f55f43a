use anyhow::{Context, Result, bail};
use log::debug;
use once_cell::sync::Lazy;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::Mutex, time::Duration};
use type_gradient::GradientMode;

const CARGO_TOML: &str = include_str!("../Cargo.toml");
static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::default()));

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(skip)]
    pub is_first_run: bool,

    #[serde(skip)]
    pub app_name: String,

    #[serde(default)]
    pub preference: Preference,

    #[serde(default)]
    pub api: Api,

    #[serde(default)]
    pub appearance: Appearance,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Preference {
    #[derivative(Default(value = "1450"))]
    pub win_width: u32,

    #[derivative(Default(value = "925"))]
    pub win_height: u32,

    #[derivative(Default(value = "12"))]
    pub font_size: u32,

    #[derivative(Default(value = "\"Pixelify Sans\".to_string()"))]
    pub font_family: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Api {
    #[derivative(Default(value = "pokeapi::DEFAULT_BASE_URL.to_string()"))]
    pub base_url: String,

    // unset or 0: wait as long as the server takes
    pub timeout_secs: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Appearance {
    pub segmented_gradient: bool,

    #[derivative(Default(value = "150"))]
    pub sprite_size: u32,
}

impl Api {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Appearance {
    pub fn gradient_mode(&self) -> GradientMode {
        if self.segmented_gradient {
            GradientMode::Segmented
        } else {
            GradientMode::Overwrite
        }
    }
}

impl Config {
    /// Initializes the configuration
    ///
    /// Loads package metadata, creates directories, and loads configuration file.
    ///
    /// # Returns
    /// - `Result<()>` indicating success or failure
    pub fn init(&mut self) -> Result<()> {
        let metadata =
            toml::from_str::<toml::Table>(CARGO_TOML).with_context(|| "parse Cargo.toml failed")?;

        self.app_name = metadata
            .get("package")
            .and_then(|package| package.get("name"))
            .and_then(|name| name.as_str())
            .with_context(|| "no package name in Cargo.toml")?
            .to_string();

        let app_dirs = AppDirs::new(Some(&self.app_name), true)
            .with_context(|| "resolve application directories failed")?;
        self.crate_dirs(&app_dirs)?;
        self.load().with_context(|| "load config file failed")?;
        debug!("{:?}", self);
        Ok(())
    }

    /// Creates application directories and sets up paths
    ///
    /// # Parameters
    /// - `app_dirs`: Platform-specific application directories
    fn crate_dirs(&mut self, app_dirs: &AppDirs) -> Result<()> {
        self.config_path = app_dirs.config_dir.join(format!("{}.toml", self.app_name));
        fs::create_dir_all(&app_dirs.config_dir)?;
        Ok(())
    }

    /// Loads configuration from file or creates default if not exists
    ///
    /// An unreadable file is kept as `<name>.toml.bak` and replaced with defaults.
    fn load(&mut self) -> Result<()> {
        let parsed = fs::read_to_string(&self.config_path)
            .ok()
            .and_then(|text| toml::from_str::<Config>(&text).ok());

        match parsed {
            Some(mut c) => {
                c.config_path = self.config_path.clone();
                c.is_first_run = self.is_first_run;
                c.app_name = self.app_name.clone();
                *self = c;
                Ok(())
            }
            None => {
                self.is_first_run = true;

                if self.config_path.exists() {
                    let mut bak_file = self.config_path.clone().into_os_string();
                    bak_file.push(".bak");
                    _ = fs::copy(&self.config_path, bak_file);
                }

                self.save()
            }
        }
    }

    /// Saves the current configuration to file
    pub fn save(&self) -> Result<()> {
        match toml::to_string_pretty(self) {
            Ok(text) => Ok(fs::write(&self.config_path, text)
                .with_context(|| "save config failed".to_string())?),
            Err(e) => bail!(format!("convert config to toml format failed. {e:?}")),
        }
    }
}

/// Initializes the global configuration
///
/// This should be called once at application startup.
pub fn init() -> Result<()> {
    CONFIG
        .lock()
        .map_err(|e| anyhow::anyhow!("config lock poisoned: {e}"))?
        .init()
}

/// Returns a clone of the current configuration
pub fn all() -> Config {
    CONFIG
        .lock()
        .map(|config| config.clone())
        .unwrap_or_default()
}

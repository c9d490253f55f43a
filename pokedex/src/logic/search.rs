//! Search handler
//!
//! Runs one lookup chain per search on a tokio task and hands the results
//! back to the UI thread: profile first, evolution paths second.

use super::{sprite::decode_sprite, toast, util};
use crate::{
    config::{self, Config},
    global_store, logic_cb,
    slint_generatedAppWindow::{
        AppWindow, PokemonEntry as UIPokemonEntry, StatEntry as UIStatEntry,
    },
    toast_warn,
};
use anyhow::Result;
use image::{RgbImage, RgbaImage};
use pokeapi::{
    PokeApiClient, PokeApiError, Profile, evolution_text, lookup, lookup_evolution,
    normalize_query,
};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel, Weak};
use type_gradient::{GradientConfig, type_colors};

const EVOLUTION_PLACEHOLDER: &str = "Evolution: -";

/// Everything the UI thread needs, decoded off the event loop.
struct PreparedProfile {
    profile: Profile,
    background: RgbImage,
    sprite: Option<RgbaImage>,
}

pub fn init(ui: &AppWindow) {
    logic_cb!(search, ui, query);
}

fn search(ui: &AppWindow, query: SharedString) {
    let query = match search_query(&query) {
        Ok(query) => query,
        Err(e) => {
            toast_warn!(ui, e);
            return;
        }
    };

    if global_store!(ui).get_is_searching() {
        log::debug!("search `{query}` ignored, a search is already running");
        return;
    }
    global_store!(ui).set_is_searching(true);

    let ui_weak = ui.as_weak();
    tokio::spawn(async move {
        run_search(ui_weak.clone(), query).await;

        _ = ui_weak.upgrade_in_event_loop(|ui| {
            global_store!(ui).set_is_searching(false);
        });
    });
}

async fn run_search(ui: Weak<AppWindow>, query: String) {
    let config = config::all();

    let api = match PokeApiClient::new(&config.api.base_url, config.api.timeout()) {
        Ok(api) => api,
        Err(e) => {
            toast::async_toast_error(ui, search_error_message(&e));
            return;
        }
    };

    let profile = match lookup(&api, &query).await {
        Ok(profile) => profile,
        Err(e) => {
            log::warn!("search `{query}` failed: {e}");
            toast::async_toast_error(ui, search_error_message(&e));
            return;
        }
    };

    let species_url = profile.species_url.clone();
    match prepare(profile, &config) {
        Ok(prepared) => {
            _ = ui.upgrade_in_event_loop(move |ui| show_profile(&ui, prepared));
        }
        Err(e) => {
            log::warn!("render `{query}` failed: {e:?}");
            toast::async_toast_error(ui, format!("Error rendering data: {e}"));
            return;
        }
    }

    match lookup_evolution(&api, &species_url).await {
        Ok(paths) => {
            _ = ui.upgrade_in_event_loop(move |ui| {
                global_store!(ui).set_evolution(evolution_text(&paths).into());
            });
        }
        Err(e) => {
            log::warn!("evolution of `{query}` failed: {e}");
            toast::async_toast_error(ui, format!("Error fetching evolution data: {e}"));
        }
    }
}

/// The query sent to the API, or the warning shown instead of searching.
fn search_query(raw: &str) -> Result<String, PokeApiError> {
    normalize_query(raw).ok_or(PokeApiError::EmptyQuery)
}

fn search_error_message(e: &PokeApiError) -> String {
    match e {
        PokeApiError::EmptyQuery | PokeApiError::NotFound(_) => e.to_string(),
        _ => format!("Error fetching data: {e}"),
    }
}

fn prepare(profile: Profile, config: &Config) -> Result<PreparedProfile> {
    let colors = type_colors(&profile.types);
    let background = GradientConfig::new()
        .with_mode(config.appearance.gradient_mode())
        .generate(&colors)?;

    // A broken sprite leaves the image area empty, the rest still renders.
    let sprite = profile.sprite.as_deref().and_then(|bytes| {
        decode_sprite(bytes, config.appearance.sprite_size)
            .map_err(|e| log::warn!("sprite of {} skipped: {e:?}", profile.name))
            .ok()
    });

    Ok(PreparedProfile {
        profile,
        background,
        sprite,
    })
}

fn show_profile(ui: &AppWindow, prepared: PreparedProfile) {
    let PreparedProfile {
        profile,
        background,
        sprite,
    } = prepared;

    global_store!(ui).set_entry(profile_entry(&profile));
    global_store!(ui).set_evolution(EVOLUTION_PLACEHOLDER.into());
    global_store!(ui).set_background(util::rgb_image(&background));
    global_store!(ui).set_sprite(sprite.as_ref().map(util::rgba_image).unwrap_or_default());
}

fn profile_entry(profile: &Profile) -> UIPokemonEntry {
    let stats = profile
        .stat_lines()
        .into_iter()
        .map(|line| UIStatEntry {
            text: line.text().into(),
            value: line.bar_value() as i32,
        })
        .collect::<Vec<_>>();

    UIPokemonEntry {
        id: profile.id_text().into(),
        name: profile.name_text().into(),
        types: profile.types_text().into(),
        height: profile.height_text().into(),
        weight: profile.weight_text().into(),
        abilities: profile.abilities_text().into(),
        stats: ModelRc::new(VecModel::from(stats)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slint::Model;
    use std::collections::HashMap;

    fn tauros() -> Profile {
        Profile {
            id: 128,
            name: "Tauros".to_string(),
            types: vec!["normal".to_string()],
            height_m: 1.4,
            weight_kg: 88.4,
            stats: HashMap::from([("hp".to_string(), 75), ("attack".to_string(), 100)]),
            abilities: vec!["Intimidate".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_profile_entry() {
        let entry = profile_entry(&tauros());
        assert_eq!("ID: 128", entry.id.as_str());
        assert_eq!("Types: Normal", entry.types.as_str());
        assert_eq!("Weight: 88.4 kg", entry.weight.as_str());

        let stats = entry.stats.iter().collect::<Vec<_>>();
        assert_eq!(4, stats.len());
        assert_eq!("Attack: 100", stats[1].text.as_str());
        assert_eq!(0, stats[3].value);
        assert_eq!("Speed: -", stats[3].text.as_str());
    }

    #[test]
    fn test_prepare_without_sprite() -> Result<()> {
        let prepared = prepare(tauros(), &Config::default())?;
        assert_eq!(
            (type_gradient::GRADIENT_WIDTH, type_gradient::GRADIENT_HEIGHT),
            prepared.background.dimensions()
        );
        assert!(prepared.sprite.is_none());
        Ok(())
    }

    #[test]
    fn test_prepare_with_broken_sprite() -> Result<()> {
        let profile = Profile {
            sprite: Some(b"garbage".to_vec().into()),
            ..tauros()
        };

        let prepared = prepare(profile, &Config::default())?;
        assert!(prepared.sprite.is_none());
        assert_eq!("Tauros", prepared.profile.name);
        Ok(())
    }

    #[test]
    fn test_blank_query_warns() {
        for raw in ["", "   ", "\t\n"] {
            let err = search_query(raw).unwrap_err();
            assert!(matches!(err, PokeApiError::EmptyQuery));
            assert_eq!("Please enter a Pokémon name or ID.", err.to_string());
        }

        assert_eq!("pikachu", search_query("  Pikachu ").unwrap());
        assert_eq!("25", search_query("25").unwrap());
    }

    #[test]
    fn test_search_error_message() {
        assert_eq!(
            "Pokémon missingno not found.",
            search_error_message(&PokeApiError::NotFound("missingno".to_string()))
        );
        assert_eq!(
            "Error fetching data: HTTP request u returned status 500",
            search_error_message(&PokeApiError::StatusError {
                status: 500,
                url: "u".to_string(),
            })
        );
    }
}

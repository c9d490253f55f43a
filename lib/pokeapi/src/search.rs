use crate::{
    PokeApiError, Result,
    client::PokeApi,
    evolution::{EvolutionNode, resolve_chain},
    profile::Profile,
};

/// Trims and lower-cases the search box text. Blank input gives `None`.
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim().to_lowercase();
    (!query.is_empty()).then_some(query)
}

/// Looks up one entity and its sprite.
///
/// Blank input fails with [`PokeApiError::EmptyQuery`] before `api` is touched.
pub async fn lookup<A: PokeApi + ?Sized>(api: &A, raw: &str) -> Result<Profile> {
    let query = normalize_query(raw).ok_or(PokeApiError::EmptyQuery)?;

    let pokemon = api.pokemon(&query).await?;
    let sprite_url = pokemon.sprites.front_default.clone();
    let mut profile = Profile::from(pokemon);

    match sprite_url {
        Some(url) => profile.sprite = Some(api.sprite(&url).await?),
        None => log::warn!("{} has no front sprite", profile.name),
    }

    log::info!("found {} (#{})", profile.name, profile.id);
    Ok(profile)
}

/// Resolves the evolution paths reachable from a species resource.
///
/// A species without an evolution chain yields no paths.
pub async fn lookup_evolution<A: PokeApi + ?Sized>(
    api: &A,
    species_url: &str,
) -> Result<Vec<String>> {
    let species = api.species(species_url).await?;

    let Some(chain) = species.evolution_chain else {
        log::info!("species `{}` has no evolution chain", species.name);
        return Ok(vec![]);
    };

    let chain = api.evolution_chain(&chain.url).await?;
    let paths = resolve_chain(&EvolutionNode::from(&chain.chain));

    log::debug!("evolution paths: {paths:?}");
    Ok(paths)
}

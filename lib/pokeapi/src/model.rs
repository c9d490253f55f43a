//! The subset of the PokeAPI v2 JSON schema the app reads.
//!
//! Unknown fields are ignored, so full API responses decode as-is.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,

    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiResource {
    pub url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,

    /// decimetres
    pub height: u32,

    /// hectograms
    pub weight: u32,

    #[serde(default)]
    pub types: Vec<TypeSlot>,

    #[serde(default)]
    pub stats: Vec<StatSlot>,

    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,

    #[serde(default)]
    pub sprites: Sprites,

    pub species: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,

    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AbilitySlot {
    pub ability: NamedResource,

    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Species {
    #[serde(default)]
    pub name: String,

    pub evolution_chain: Option<ApiResource>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EvolutionChain {
    #[serde(default)]
    pub id: u32,

    pub chain: ChainLink,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChainLink {
    pub species: NamedResource,

    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_decode() -> anyhow::Result<()> {
        let text = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
            "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}}],
            "abilities": [{"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1}],
            "sprites": {"front_default": "https://example.com/25.png", "back_default": null},
            "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}
        }"#;

        let pokemon = serde_json::from_str::<Pokemon>(text)?;
        assert_eq!(25, pokemon.id);
        assert_eq!("electric", pokemon.types[0].kind.name);
        assert_eq!(35, pokemon.stats[0].base_stat);
        assert_eq!("static", pokemon.abilities[0].ability.name);
        assert_eq!(
            Some("https://example.com/25.png".to_string()),
            pokemon.sprites.front_default
        );
        Ok(())
    }

    #[test]
    fn test_pokemon_decode_null_sprite() -> anyhow::Result<()> {
        let text = r#"{
            "id": 10001, "name": "deoxys-attack", "height": 17, "weight": 608,
            "sprites": {"front_default": null},
            "species": {"name": "deoxys", "url": "u"}
        }"#;

        let pokemon = serde_json::from_str::<Pokemon>(text)?;
        assert!(pokemon.types.is_empty());
        assert_eq!(None, pokemon.sprites.front_default);
        Ok(())
    }

    #[test]
    fn test_chain_decode() -> anyhow::Result<()> {
        let text = r#"{
            "id": 67,
            "baby_trigger_item": null,
            "chain": {
                "is_baby": false,
                "species": {"name": "eevee", "url": ""},
                "evolves_to": [
                    {"species": {"name": "vaporeon", "url": ""}, "evolves_to": []},
                    {"species": {"name": "jolteon", "url": ""}}
                ]
            }
        }"#;

        let chain = serde_json::from_str::<EvolutionChain>(text)?;
        assert_eq!("eevee", chain.chain.species.name);
        assert_eq!(2, chain.chain.evolves_to.len());
        assert!(chain.chain.evolves_to[1].evolves_to.is_empty());
        Ok(())
    }

    #[test]
    fn test_species_without_chain() -> anyhow::Result<()> {
        let species = serde_json::from_str::<Species>(r#"{"name": "x", "evolution_chain": null}"#)?;
        assert!(species.evolution_chain.is_none());
        Ok(())
    }
}

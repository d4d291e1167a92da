//! Status-catalog loader.

use std::path::Path;

use battle_core::env::StatusDefinition;

use crate::catalog::StandardCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for status-effect catalogs from RON files.
///
/// The file carries a plain list of definitions; ids absent from the file
/// are absent from the catalog (the engine treats those permissively).
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<StandardCatalog> {
        Self::from_ron(&read_file(path)?)
    }

    /// Parse a catalog from a RON string.
    pub fn from_ron(content: &str) -> LoadResult<StandardCatalog> {
        let definitions: Vec<StatusDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        Ok(StandardCatalog::from_definitions(definitions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::env::{StatusCatalog, TickDamage};
    use battle_core::state::StatusEffectId;

    const OVERRIDE_RON: &str = r#"
[
    (
        id: Burn,
        name: "Scorch",
        base_duration: 2,
        permanent: false,
        tick_damage: Some(FractionOfMax(fraction: 0.125)),
        act_check: None,
        stat_multipliers: (
            attack: Some(0.75),
            defense: None,
            special_attack: None,
            special_defense: None,
            speed: None,
            luck: None,
        ),
    ),
]
"#;

    #[test]
    fn parses_a_definition_list() {
        let catalog = CatalogLoader::from_ron(OVERRIDE_RON).unwrap();
        let burn = catalog.definition(StatusEffectId::Burn).unwrap();
        assert_eq!(burn.name, "Scorch");
        assert_eq!(burn.base_duration, 2);
        assert_eq!(
            burn.tick_damage,
            Some(TickDamage::FractionOfMax { fraction: 0.125 })
        );
        assert_eq!(burn.stat_multipliers.attack, Some(0.75));
        // Ids not listed in the file are simply absent.
        assert!(catalog.definition(StatusEffectId::Poison).is_none());
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(CatalogLoader::from_ron("[ (id: Nonsense) ]").is_err());
    }
}

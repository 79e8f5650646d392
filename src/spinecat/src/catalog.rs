//! Catalogue assembly and serialization.
//!
//! One linear pass over the CSV rows: resolve each character's assets,
//! collect the entries, then write the whole document at once. Missing
//! assets are the normal case and never abort the run; the only fatal
//! condition is failing to read the CSV itself.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::assets::find_char_asset;
use crate::dating::dating_folder;
use crate::record::{self, RecordError};
use crate::spine::{load_bundle, SpineBundle};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Paths for one catalogue run.
///
/// Everything derives from the public root; the CSV and output paths
/// can be overridden after construction.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Public asset root; all catalogue paths are relative to it.
    pub root: PathBuf,
    pub csv_path: PathBuf,
    pub output_path: PathBuf,
    pub thumbnail_dir: PathBuf,
    pub skill_dir: PathBuf,
    pub standing_dir: PathBuf,
    pub cutscenes_dir: PathBuf,
    pub datings_dir: PathBuf,
}

impl CatalogConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        CatalogConfig {
            csv_path: root.join("characters.csv"),
            output_path: root.join("characters.json"),
            thumbnail_dir: root.join("illust_inven_char"),
            skill_dir: root.join("illust_skill_char"),
            standing_dir: root.join("char"),
            cutscenes_dir: root.join("cutscenes"),
            datings_dir: root.join("datings"),
            root,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::new("public")
    }
}

/// One catalogued character costume.
///
/// Unresolved assets serialize as explicit `null` so consumers can
/// distinguish "checked, not there" from a malformed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterEntry {
    pub id: String,
    pub character: String,
    pub costume: String,
    pub character_image: Option<String>,
    pub skill_preview_image: Option<String>,
    pub standing: Option<SpineBundle>,
    pub cutscene: Option<SpineBundle>,
    pub dating: Option<SpineBundle>,
}

/// The output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub characters: Vec<CharacterEntry>,
}

/// Build the catalogue in memory.
///
/// Rows without an id are skipped with a warning; everything else
/// produces exactly one entry, in input order.
pub fn build(config: &CatalogConfig) -> Result<Catalog, CatalogError> {
    let rows = record::load_rows(&config.csv_path)?;

    let mut characters = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(id) = row.id() else {
            log::warn!(
                "Skipping a row in '{}' due to missing ID",
                config.csv_path.display()
            );
            continue;
        };

        let character = row.character().to_string();
        let costume = row.costume().to_string();
        log::info!("Processing: {character} - {costume} (ID: {id})");

        let character_image = find_char_asset(&config.thumbnail_dir, id, &config.root);
        let skill_preview_image = find_char_asset(&config.skill_dir, id, &config.root);

        let standing = load_bundle(&config.standing_dir, &format!("char{id}"), &config.root);
        let cutscene = load_bundle(
            &config.cutscenes_dir,
            &format!("cutscene_char{id}"),
            &config.root,
        );
        let dating =
            dating_folder(id).and_then(|f| load_bundle(&config.datings_dir, &f, &config.root));

        characters.push(CharacterEntry {
            id: id.to_string(),
            character,
            costume,
            character_image,
            skill_preview_image,
            standing,
            cutscene,
            dating,
        });
    }

    Ok(Catalog { characters })
}

/// Serialize the catalogue and replace whatever is at `path`.
pub fn write(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}

/// Build and write in one step, returning the entry count.
///
/// The document is assembled fully in memory before the output file is
/// touched, so a failed run leaves any previous catalogue intact.
pub fn run(config: &CatalogConfig) -> Result<usize, CatalogError> {
    let catalog = build(config)?;
    write(&catalog, &config.output_path)?;

    log::info!("Processed {} characters", catalog.characters.len());
    log::info!("Output written to '{}'", config.output_path.display());
    Ok(catalog.characters.len())
}

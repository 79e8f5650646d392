//! # spinecat
//!
//! Character asset catalogue library.
//!
//! This library provides functionality to:
//! - Load character base records from a CSV file
//! - Locate thumbnail and skill-preview images by naming convention
//! - Discover Spine animation bundles (skeleton, atlas, images) on disk
//! - Assemble and serialize the `characters.json` catalogue
//!
//! ## Example
//!
//! ```no_run
//! use spinecat::catalog::{self, CatalogConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CatalogConfig::new("public");
//! let count = catalog::run(&config)?;
//! println!("catalogued {count} characters");
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod catalog;
pub mod dating;
pub mod record;
pub mod spine;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{Catalog, CatalogConfig, CatalogError, CharacterEntry};
#[doc(inline)]
pub use record::{CharacterRow, RecordError};
#[doc(inline)]
pub use spine::SpineBundle;

// Dating-story lookups
#[doc(inline)]
pub use dating::{dating_folder, story_index, DatingStory, DATING_STORIES};

pub mod builder;
pub mod config;
pub mod duration;
pub mod error;
pub mod extractors;
pub mod ingredient;
pub mod model;
pub mod normalizer;
pub mod prompt;
pub mod units;

pub use builder::{ImportResult, OutputMode, RecipeImporter, RecipeImporterBuilder};
pub use crate::config::ImportConfig;
pub use error::{ConversionFault, ImportError};
pub use extractors::{extract_json_block, Extractor, FencedJsonExtractor, LinkedDataRecipe};
pub use model::{ImportPayload, Ingredient, Keyword, Recipe, Step};
pub use normalizer::{normalize, Normalizer};

use log::debug;

/// Extract the linked-data recipe from an AI response.
pub fn extract_recipe(text: &str) -> Result<LinkedDataRecipe, ImportError> {
    FencedJsonExtractor.extract(text)
}

/// Turn an AI response into a normalized recipe using default settings.
///
/// A response without a ```json block yields `ImportError::NotFound`.
pub fn import_from_text(text: &str) -> Result<Recipe, ImportError> {
    let linked_data = extract_recipe(text)?;
    debug!("{:#?}", linked_data);
    Ok(normalize(&linked_data))
}

use crate::error::ImportError;

mod fenced_json;
mod json_ld;

pub use self::fenced_json::{extract_json_block, FencedJsonExtractor};
pub use self::json_ld::{Instructions, LinkedDataRecipe};

pub trait Extractor {
    fn extract(&self, text: &str) -> Result<LinkedDataRecipe, ImportError>;
}

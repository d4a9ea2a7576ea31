use log::debug;
use serde_json::Value;

use crate::error::ImportError;
use crate::extractors::{Extractor, LinkedDataRecipe};

const OPENING_FENCE: &str = "```json";
const CLOSING_FENCE: &str = "```";

/// Pulls the recipe out of the first ```json block of an AI response
pub struct FencedJsonExtractor;

impl Extractor for FencedJsonExtractor {
    fn extract(&self, text: &str) -> Result<LinkedDataRecipe, ImportError> {
        let block = extract_json_block(text)?;
        debug!("JSON block: {}", block);

        let value = parse_object(block)?;
        LinkedDataRecipe::try_from(value).map_err(|e| ImportError::MalformedData(e.to_string()))
    }
}

/// Trimmed content of the first ```json block.
///
/// A single forward pass: the first opening fence wins and the block ends
/// at the next ```, whether it sits on its own line or right after the
/// last JSON line. An unclosed block runs to the end of the text.
pub fn extract_json_block(text: &str) -> Result<&str, ImportError> {
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        offset += line.len();
        if is_opening_fence(line) {
            let body = &text[offset..];
            let end = body.find(CLOSING_FENCE).unwrap_or(body.len());
            return Ok(body[..end].trim());
        }
    }

    Err(ImportError::NotFound)
}

fn is_opening_fence(line: &str) -> bool {
    line.find(OPENING_FENCE)
        .is_some_and(|pos| line[pos + OPENING_FENCE.len()..].trim().is_empty())
}

/// Parses the block and unwraps a `@graph` container if the recipe sits in one
fn parse_object(block: &str) -> Result<Value, ImportError> {
    let value: Value =
        serde_json::from_str(block).map_err(|e| ImportError::MalformedData(e.to_string()))?;

    if !value.is_object() {
        return Err(ImportError::MalformedData(format!(
            "expected a JSON object, found {}",
            json_type_name(&value)
        )));
    }

    if value.get("recipeIngredient").is_none() && value.get("recipeInstructions").is_none() {
        if let Some(recipe) = value
            .get("@graph")
            .and_then(Value::as_array)
            .and_then(|arr| arr.iter().find(|item| is_recipe_type(item)))
        {
            debug!("Using Recipe from @graph");
            return Ok(recipe.clone());
        }
    }

    Ok(value)
}

fn is_recipe_type(item: &Value) -> bool {
    match item.get("@type") {
        Some(Value::String(kind)) => kind.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .any(|kind| kind.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

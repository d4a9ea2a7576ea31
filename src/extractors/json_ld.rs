use html_escape::decode_html_entities;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// schema.org Recipe object as written by the AI provider.
///
/// Every field is optional. A field whose JSON type cannot be used is
/// treated as missing instead of rejecting the whole recipe.
#[derive(Debug, Default, Deserialize)]
pub struct LinkedDataRecipe {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    description: Option<DescriptionType>,
    #[serde(rename = "recipeYield", default, deserialize_with = "lenient")]
    recipe_yield: Option<RecipeYield>,
    // a recipe that went through the normalizer once carries `servings`
    #[serde(default, deserialize_with = "lenient")]
    servings: Option<RecipeYield>,
    #[serde(rename = "prepTime", default, deserialize_with = "lenient")]
    prep_time: Option<String>,
    #[serde(rename = "cookTime", default, deserialize_with = "lenient")]
    cook_time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    keywords: Option<Keywords>,
    #[serde(rename = "recipeIngredient", default, deserialize_with = "lenient")]
    recipe_ingredient: Option<IngredientLines>,
    #[serde(rename = "recipeInstructions", default, deserialize_with = "lenient")]
    recipe_instructions: Option<RecipeInstructions>,
}

#[derive(Debug, Deserialize)]
struct TextObject {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DescriptionType {
    String(String),
    Object(TextObject),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeYield {
    Integer(u32),
    Float(f64),
    String(String),
    Multiple(Vec<RecipeYield>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Keywords {
    String(String),
    Multiple(Vec<KeywordItem>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeywordItem {
    String(String),
    Named { name: String },
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IngredientLines {
    Multiple(Vec<Value>),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeInstructions {
    String(String),
    Multiple(Vec<InstructionItem>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionItem {
    String(String),
    HowToSection {
        #[serde(rename = "itemListElement")]
        item_list_element: Vec<InstructionItem>,
    },
    HowToStep {
        text: Option<String>,
        name: Option<String>,
    },
    Other(Value),
}

/// Instructions as either an ordered list or one block of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instructions {
    List(Vec<String>),
    Text(String),
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            warn!("Ignoring unusable field value {}: {}", value, e);
            Ok(None)
        }
    }
}

fn decode_html_symbols(text: &str) -> String {
    // AI output is sometimes escaped twice (`&amp;uuml;`)
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

impl TryFrom<Value> for LinkedDataRecipe {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

impl RecipeYield {
    fn servings(&self) -> Option<u32> {
        match self {
            RecipeYield::Integer(n) => Some(*n),
            RecipeYield::Float(f) if f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(f) => {
                Some(*f as u32)
            }
            RecipeYield::Float(f) => {
                warn!("Unusable number of servings in recipeYield {}", f);
                None
            }
            RecipeYield::String(text) => {
                let digits: String = text
                    .trim_start()
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .collect();
                let servings = digits.parse().ok();
                if servings.is_none() {
                    warn!("No number of servings in recipeYield {:?}", text);
                }
                servings
            }
            RecipeYield::Multiple(yields) => yields.iter().find_map(RecipeYield::servings),
        }
    }
}

impl InstructionItem {
    fn collect_into(&self, out: &mut Vec<String>) {
        match self {
            InstructionItem::String(text) => out.push(decode_html_symbols(text)),
            InstructionItem::HowToSection { item_list_element } => {
                for item in item_list_element {
                    item.collect_into(out);
                }
            }
            InstructionItem::HowToStep { text, name } => {
                let text = text.as_deref().or(name.as_deref()).unwrap_or_default();
                out.push(decode_html_symbols(text));
            }
            InstructionItem::Other(value) => {
                warn!("Instruction without text: {}", value);
                out.push(String::new());
            }
        }
    }
}

impl LinkedDataRecipe {
    pub fn name(&self) -> Option<String> {
        self.name.as_deref().map(decode_html_symbols)
    }

    pub fn description(&self) -> Option<String> {
        self.description.as_ref().map(|desc| match desc {
            DescriptionType::String(text) => decode_html_symbols(text),
            DescriptionType::Object(obj) => decode_html_symbols(&obj.text),
        })
    }

    pub fn servings(&self) -> Option<u32> {
        self.recipe_yield
            .as_ref()
            .or(self.servings.as_ref())
            .and_then(RecipeYield::servings)
    }

    pub fn prep_time(&self) -> Option<&str> {
        self.prep_time.as_deref()
    }

    pub fn cook_time(&self) -> Option<&str> {
        self.cook_time.as_deref()
    }

    /// Trimmed, non-empty keywords; `None` when the field is missing
    pub fn keywords(&self) -> Option<Vec<String>> {
        let raw: Vec<String> = match self.keywords.as_ref()? {
            Keywords::String(text) => text.split(',').map(str::to_string).collect(),
            Keywords::Multiple(items) => items
                .iter()
                .filter_map(|item| match item {
                    KeywordItem::String(text) => Some(text.clone()),
                    KeywordItem::Named { name } => Some(name.clone()),
                    KeywordItem::Other(value) => {
                        warn!("Ignoring keyword {}", value);
                        None
                    }
                })
                .collect(),
        };

        Some(
            raw.iter()
                .map(|kw| decode_html_symbols(kw.trim()))
                .filter(|kw| !kw.is_empty())
                .collect(),
        )
    }

    /// One entry per ingredient line, in source order
    pub fn ingredient_lines(&self) -> Option<Vec<String>> {
        let lines = match self.recipe_ingredient.as_ref()? {
            IngredientLines::Multiple(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(line) => line.clone(),
                    other => other.to_string(),
                })
                .collect(),
            IngredientLines::String(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        };
        Some(lines)
    }

    pub fn instructions(&self) -> Option<Instructions> {
        match self.recipe_instructions.as_ref()? {
            RecipeInstructions::String(text) => Some(Instructions::Text(decode_html_symbols(text))),
            RecipeInstructions::Multiple(items) => {
                let mut steps = Vec::new();
                for item in items {
                    item.collect_into(&mut steps);
                }
                Some(Instructions::List(steps))
            }
        }
    }
}

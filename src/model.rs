use serde::{Deserialize, Serialize};

/// Recipe in the shape the Tandoor import expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub servings: u32,
    /// Minutes of preparation
    pub working_time: u32,
    /// Minutes of cooking or resting
    pub waiting_time: u32,
    pub keywords: Vec<Keyword>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub instruction: String,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub food_name: String,
    pub amount: f64,
    pub unit: String,
    pub note: String,
}

impl Recipe {
    pub fn ingredient_count(&self) -> usize {
        self.steps
            .iter()
            .flatten()
            .map(|step| step.ingredients.len())
            .sum()
    }
}

/// Request body for Tandoor's `recipe-from-source` endpoint.
///
/// `data` carries the recipe as a JSON string, not as a nested object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportPayload {
    pub data: String,
    pub url: String,
}

impl ImportPayload {
    pub fn new(recipe: &Recipe, url: impl Into<String>) -> Result<Self, serde_json::Error> {
        Ok(ImportPayload {
            data: serde_json::to_string(recipe)?,
            url: url.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bare_recipe() -> Recipe {
        Recipe {
            name: "Brot".to_string(),
            description: String::new(),
            servings: 4,
            working_time: 0,
            waiting_time: 0,
            keywords: vec![],
            steps: None,
        }
    }

    #[test]
    fn test_missing_steps_are_not_serialized() {
        let value = serde_json::to_value(bare_recipe()).unwrap();
        assert!(value.get("steps").is_none());
        assert_eq!(value["servings"], json!(4));
        assert_eq!(value["keywords"], json!([]));
    }

    #[test]
    fn test_ingredient_field_names() {
        let mut recipe = bare_recipe();
        recipe.steps = Some(vec![Step {
            instruction: "Kneten".to_string(),
            ingredients: vec![Ingredient {
                food_name: "Mehl".to_string(),
                amount: 500.0,
                unit: "g".to_string(),
                note: String::new(),
            }],
        }]);

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(
            value["steps"][0]["ingredients"][0],
            json!({"food_name": "Mehl", "amount": 500.0, "unit": "g", "note": ""})
        );
        assert_eq!(recipe.ingredient_count(), 1);
    }

    #[test]
    fn test_import_payload_embeds_recipe_as_string() {
        let payload = ImportPayload::new(&bare_recipe(), "").unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["url"], json!(""));

        let data: Recipe = serde_json::from_str(value["data"].as_str().unwrap()).unwrap();
        assert_eq!(data, bare_recipe());
    }
}

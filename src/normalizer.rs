//! Maps a linked-data recipe onto the Tandoor recipe schema.

use log::info;

use crate::config::NormalizerConfig;
use crate::duration::to_minutes;
use crate::extractors::{Instructions, LinkedDataRecipe};
use crate::ingredient::IngredientParser;
use crate::model::{Keyword, Recipe, Step};
use crate::units::UnitTable;

#[derive(Debug, Clone)]
pub struct Normalizer {
    default_name: String,
    default_servings: u32,
    parser: IngredientParser,
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::new(&NormalizerConfig::default())
    }
}

impl Normalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Normalizer {
            default_name: config.default_name.clone(),
            default_servings: config.default_servings,
            parser: IngredientParser::new(UnitTable::with_extra(&config.extra_units)),
        }
    }

    pub fn normalize(&self, source: &LinkedDataRecipe) -> Recipe {
        let recipe = Recipe {
            name: source.name().unwrap_or_else(|| self.default_name.clone()),
            description: source.description().unwrap_or_default(),
            servings: source.servings().unwrap_or(self.default_servings),
            working_time: to_minutes(source.prep_time()),
            waiting_time: to_minutes(source.cook_time()),
            keywords: source
                .keywords()
                .unwrap_or_default()
                .into_iter()
                .map(|name| Keyword { name })
                .collect(),
            steps: self.steps(source),
        };

        info!(
            "Normalized recipe {:?}: {} steps, {} ingredients",
            recipe.name,
            recipe.steps.as_ref().map_or(0, Vec::len),
            recipe.ingredient_count()
        );
        recipe
    }

    /// All ingredients go into the first step; instructions fill steps by position.
    fn steps(&self, source: &LinkedDataRecipe) -> Option<Vec<Step>> {
        let mut steps = source.ingredient_lines().map(|lines| {
            vec![Step {
                instruction: String::new(),
                ingredients: lines.iter().map(|line| self.parser.parse(line)).collect(),
            }]
        });

        match source.instructions() {
            Some(Instructions::List(instructions)) => {
                for (i, instruction) in instructions.into_iter().enumerate() {
                    let steps = steps.get_or_insert_with(Vec::new);
                    if i < steps.len() {
                        steps[i].instruction = instruction;
                    } else {
                        steps.push(Step {
                            instruction,
                            ingredients: Vec::new(),
                        });
                    }
                }
            }
            Some(Instructions::Text(instruction)) => {
                let steps = steps.get_or_insert_with(Vec::new);
                if let Some(first) = steps.first_mut() {
                    first.instruction = instruction;
                } else {
                    steps.push(Step {
                        instruction,
                        ingredients: Vec::new(),
                    });
                }
            }
            None => {}
        }

        steps
    }
}

/// Normalizes with the default name, servings and unit vocabulary
pub fn normalize(source: &LinkedDataRecipe) -> Recipe {
    Normalizer::default().normalize(source)
}

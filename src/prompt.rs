/// Prompt asking the AI provider to transcribe a recipe card into the
/// fenced JSON block the extractor understands.
///
/// Loaded from `prompt.txt` at compile time.
pub const RECIPE_CARD_PROMPT: &str = include_str!("prompt.txt");

pub const DEFAULT_PROMPT: &str =
    "Was ist auf diesem Bild zu sehen? Beschreibe das Bild detailliert.";

const PROMPTS: &[(&str, &str)] = &[
    ("general", DEFAULT_PROMPT),
    (
        "food",
        "Welche Lebensmittel sind auf diesem Bild zu sehen? Liste alle erkennbaren Zutaten auf.",
    ),
    ("recipe", RECIPE_CARD_PROMPT),
    (
        "nutrition",
        "Welche Lebensmittel sind auf diesem Bild zu sehen? Schätze die ungefähren Nährwerte (Kalorien, Protein, Kohlenhydrate, Fett) für die sichtbaren Portionen.",
    ),
];

/// Prompt for `kind` (case-insensitive), falling back to the general prompt
pub fn get_prompt(kind: &str) -> &'static str {
    let kind = kind.trim().to_lowercase();
    PROMPTS
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, prompt)| *prompt)
        .unwrap_or(DEFAULT_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_prompt_is_embedded() {
        assert!(!RECIPE_CARD_PROMPT.is_empty());
        assert!(RECIPE_CARD_PROMPT.contains("```json"));
        assert!(RECIPE_CARD_PROMPT.contains("recipeIngredient"));
        assert!(RECIPE_CARD_PROMPT.contains("PT1H30M"));
    }

    #[test]
    fn test_get_prompt() {
        assert_eq!(get_prompt("recipe"), RECIPE_CARD_PROMPT);
        assert_eq!(get_prompt("RECIPE"), RECIPE_CARD_PROMPT);
        assert!(get_prompt("food").contains("Zutaten"));
        assert_eq!(get_prompt("general"), DEFAULT_PROMPT);
        assert_eq!(get_prompt("dessert"), DEFAULT_PROMPT);
        assert_eq!(get_prompt(""), DEFAULT_PROMPT);
    }
}

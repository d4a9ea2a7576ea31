use crate::config::ImportConfig;
use crate::extractors::{Extractor, FencedJsonExtractor};
use crate::model::{ImportPayload, Recipe};
use crate::normalizer::Normalizer;
use crate::units::UnitEntry;
use crate::ImportError;

/// Represents the desired output format
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Normalized recipe (default)
    #[default]
    Recipe,
    /// Request body for the Tandoor import endpoint
    Payload,
}

/// Result of a recipe import operation
#[derive(Debug, Clone)]
pub enum ImportResult {
    Recipe(Recipe),
    Payload(ImportPayload),
}

/// Builder for configuring and executing recipe imports
#[derive(Debug, Default)]
pub struct RecipeImporterBuilder {
    text: Option<String>,
    mode: OutputMode,
    config: ImportConfig,
}

impl RecipeImporterBuilder {
    /// Set the AI response to import
    ///
    /// # Example
    /// ```
    /// use tandoor_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .text("```json\n{\"name\": \"Waffeln\"}\n```");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Produce an [`ImportPayload`] instead of the bare recipe
    pub fn payload(mut self) -> Self {
        self.mode = OutputMode::Payload;
        self
    }

    /// Replace the whole configuration, e.g. with [`ImportConfig::load`]
    pub fn config(mut self, config: ImportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn default_name(mut self, name: impl Into<String>) -> Self {
        self.config.normalizer.default_name = name.into();
        self
    }

    pub fn default_servings(mut self, servings: u32) -> Self {
        self.config.normalizer.default_servings = servings;
        self
    }

    /// Recognise an additional unit, e.g. `.unit("Bund", &["bund", "bunch"])`
    pub fn unit(mut self, canonical: &str, spellings: &[&str]) -> Self {
        self.config
            .normalizer
            .extra_units
            .push(UnitEntry::new(canonical, spellings));
        self
    }

    /// URL recorded in the import payload
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.config.import.source_url = url.into();
        self
    }

    /// Extract and normalize the recipe
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No text was given
    /// - The text has no ```json block (`NotFound`)
    /// - The block is not a JSON object (`MalformedData`)
    ///
    /// # Example
    /// ```
    /// use tandoor_import::{ImportResult, RecipeImporter};
    ///
    /// let result = RecipeImporter::builder()
    ///     .text("```json\n{\"name\": \"Waffeln\", \"recipeYield\": 6}\n```")
    ///     .build()
    ///     .unwrap();
    ///
    /// match result {
    ///     ImportResult::Recipe(recipe) => assert_eq!(recipe.servings, 6),
    ///     ImportResult::Payload(_) => unreachable!(),
    /// }
    /// ```
    pub fn build(self) -> Result<ImportResult, ImportError> {
        let text = self.text.ok_or_else(|| {
            ImportError::BuilderError("No input text specified. Use .text()".to_string())
        })?;

        let linked_data = FencedJsonExtractor.extract(&text)?;
        let recipe = Normalizer::new(&self.config.normalizer).normalize(&linked_data);

        match self.mode {
            OutputMode::Recipe => Ok(ImportResult::Recipe(recipe)),
            OutputMode::Payload => Ok(ImportResult::Payload(ImportPayload::new(
                &recipe,
                self.config.import.source_url,
            )?)),
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for importing recipes
    ///
    /// # Example
    /// ```
    /// use tandoor_import::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder();
    /// ```
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}

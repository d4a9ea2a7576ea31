use serde::Deserialize;

/// One recognised unit: the form written into the recipe plus every
/// spelling that maps to it
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UnitEntry {
    pub canonical: String,
    #[serde(default)]
    pub spellings: Vec<String>,
}

impl UnitEntry {
    pub fn new(canonical: &str, spellings: &[&str]) -> Self {
        UnitEntry {
            canonical: canonical.to_string(),
            spellings: spellings.iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}

/// Lookup form of a [`UnitEntry`]; every key is lowercase
#[derive(Debug, Clone)]
struct KnownUnit {
    canonical: String,
    keys: Vec<String>,
}

impl From<UnitEntry> for KnownUnit {
    fn from(entry: UnitEntry) -> Self {
        let mut keys = vec![entry.canonical.to_lowercase()];
        keys.extend(entry.spellings.iter().map(|s| s.to_lowercase()));
        KnownUnit {
            canonical: entry.canonical,
            keys,
        }
    }
}

/// Closed, case-insensitive unit vocabulary
#[derive(Debug, Clone)]
pub struct UnitTable {
    units: Vec<KnownUnit>,
}

impl Default for UnitTable {
    fn default() -> Self {
        let mut table = UnitTable { units: Vec::new() };
        table.extend([
            UnitEntry::new("g", &["g", "gr", "gramm", "gram", "grams"]),
            UnitEntry::new("kg", &["kg", "kilo", "kilogramm", "kilogram"]),
            UnitEntry::new("ml", &["ml", "milliliter", "millilitre"]),
            UnitEntry::new("l", &["l", "liter", "litre", "liters", "litres"]),
            UnitEntry::new("EL", &["el", "tbsp", "tablespoon", "tablespoons", "esslöffel"]),
            UnitEntry::new("TL", &["tl", "tsp", "teaspoon", "teaspoons", "teelöffel"]),
            UnitEntry::new("Stück", &["stück", "stk", "piece", "pieces", "pc"]),
            UnitEntry::new("Prise", &["prise", "prisen", "pinch", "pinches"]),
            UnitEntry::new("cup", &["cup", "cups", "tasse", "tassen"]),
        ]);
        table
    }
}

impl UnitTable {
    /// Built-in vocabulary followed by `extra` entries
    pub fn with_extra(extra: &[UnitEntry]) -> Self {
        let mut table = UnitTable::default();
        table.extend(extra.iter().cloned());
        table
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = UnitEntry>) {
        self.units.extend(entries.into_iter().map(KnownUnit::from));
    }

    /// Canonical form for `token`, if it is a known unit
    pub fn lookup(&self, token: &str) -> Option<&str> {
        if token.is_empty() {
            return None;
        }
        let token = token.to_lowercase();
        self.units
            .iter()
            .find(|unit| unit.keys.contains(&token))
            .map(|unit| unit.canonical.as_str())
    }
}

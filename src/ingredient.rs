//! Splits one free-text ingredient line into amount, unit, food and note.
//!
//! The four extractions are independent of each other; the unit and food
//! name share [`locate_unit`] so they agree on which tokens are quantity.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::error::ConversionFault;
use crate::model::Ingredient;
use crate::units::UnitTable;

// the number must end the first token or run straight into a glued unit
static RE_LEADING_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:[.,]\d+)?)\p{L}*(?:\s|$)").unwrap());

static RE_NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)?$").unwrap());

static RE_GLUED_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)?(\p{L}+)$").unwrap());

static DEFAULT_UNITS: LazyLock<UnitTable> = LazyLock::new(UnitTable::default);

/// Where the unit sits relative to the leading number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitPlacement {
    /// `200g flour`
    Glued,
    /// `1 TL salt`
    Separate,
    None,
}

/// Parses ingredient lines against a unit vocabulary
#[derive(Debug, Clone, Default)]
pub struct IngredientParser {
    units: UnitTable,
}

impl IngredientParser {
    pub fn new(units: UnitTable) -> Self {
        IngredientParser { units }
    }

    pub fn parse(&self, line: &str) -> Ingredient {
        Ingredient {
            food_name: food_name_with(&self.units, line),
            amount: extract_amount(line),
            unit: unit_with(&self.units, line),
            note: extract_note(line),
        }
    }
}

/// Leading integer or decimal number of the line, 0 when there is none.
pub fn extract_amount(line: &str) -> f64 {
    let Some(found) = RE_LEADING_AMOUNT
        .captures(line.trim_start())
        .and_then(|caps| caps.get(1))
    else {
        return 0.0;
    };
    parse_amount(found.as_str()).unwrap_or_else(|fault| {
        warn!("Ignoring ingredient amount: {}", fault);
        0.0
    })
}

/// Canonical unit following the leading number, or "" if none is known.
pub fn extract_unit(line: &str) -> String {
    unit_with(&DEFAULT_UNITS, line)
}

/// The line without its quantity and unit tokens.
pub fn extract_food_name(line: &str) -> String {
    food_name_with(&DEFAULT_UNITS, line)
}

/// Text inside the first `(...)`, or "" if there is no well-formed pair.
pub fn extract_note(line: &str) -> String {
    match (line.find('('), line.find(')')) {
        (Some(open), Some(close)) if open < close => line[open + 1..close].to_string(),
        _ => String::new(),
    }
}

fn parse_amount(number: &str) -> Result<f64, ConversionFault> {
    number
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ConversionFault::InvalidNumber {
            field: "amount",
            input: number.to_string(),
        })
}

fn unit_with(units: &UnitTable, line: &str) -> String {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    locate_unit(units, &tokens)
        .0
        .map(str::to_string)
        .unwrap_or_default()
}

fn food_name_with(units: &UnitTable, line: &str) -> String {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let skip = match locate_unit(units, &tokens).1 {
        UnitPlacement::Separate => 2,
        UnitPlacement::Glued | UnitPlacement::None => 1,
    };

    let rest = tokens.get(skip..).unwrap_or_default();
    if rest.is_empty() {
        line.to_string()
    } else {
        rest.join(" ")
    }
}

fn locate_unit<'a>(units: &'a UnitTable, tokens: &[&str]) -> (Option<&'a str>, UnitPlacement) {
    let Some(first) = tokens.first() else {
        return (None, UnitPlacement::None);
    };

    if let Some(letters) = RE_GLUED_UNIT.captures(first).and_then(|caps| caps.get(1)) {
        if let Some(unit) = units.lookup(letters.as_str()) {
            return (Some(unit), UnitPlacement::Glued);
        }
    }

    if RE_NUMBER_TOKEN.is_match(first) {
        if let Some(unit) = tokens.get(1).and_then(|token| units.lookup(token)) {
            return (Some(unit), UnitPlacement::Separate);
        }
    }

    (None, UnitPlacement::None)
}

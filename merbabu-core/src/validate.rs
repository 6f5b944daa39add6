use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Item;

const DIALOG_TITLE: &str = "Kesalahan";
const MSG_EMPTY_FIELD: &str = "Semua kolom harus diisi!";
const MSG_QUANTITY_POSITIVE: &str = "Jumlah harus berupa angka positif!";
const MSG_QUANTITY_NUMBER: &str = "Jumlah harus berupa angka!";

/// How much the form insists on before an item is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Trimmed, non-empty text fields and a quantity above zero.
    Strict,
    /// Any text, any integer quantity (zero and negatives included).
    Lenient,
}

impl Policy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Policy::Strict
        } else {
            Policy::Lenient
        }
    }

    pub fn is_strict(self) -> bool {
        matches!(self, Policy::Strict)
    }
}

/// Raw contents of the three text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub category: String,
    pub quantity: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.category.clear();
        self.quantity.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.category.is_empty() && self.quantity.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Quantity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Quantity => "quantity",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityProblem {
    NotANumber,
    NotPositive,
}

impl fmt::Display for QuantityProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuantityProblem::NotANumber => "not an integer",
            QuantityProblem::NotPositive => "not positive",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} field is empty")]
    EmptyField(Field),

    #[error("quantity {input:?} is {reason}")]
    InvalidQuantity {
        input: String,
        reason: QuantityProblem,
        policy: Policy,
    },
}

impl ValidationError {
    pub fn dialog_title(&self) -> &'static str {
        DIALOG_TITLE
    }

    /// Text shown to the user in the error dialog.
    pub fn dialog_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyField(_) => MSG_EMPTY_FIELD,
            ValidationError::InvalidQuantity { policy: Policy::Strict, .. } => MSG_QUANTITY_POSITIVE,
            ValidationError::InvalidQuantity { policy: Policy::Lenient, .. } => MSG_QUANTITY_NUMBER,
        }
    }
}

/// Check the form and build the item it describes. Pure; reporting is the caller's job.
pub fn validate(input: &FormInput, policy: Policy) -> Result<Item, ValidationError> {
    match policy {
        Policy::Strict => validate_strict(input),
        Policy::Lenient => validate_lenient(input),
    }
}

fn validate_strict(input: &FormInput) -> Result<Item, ValidationError> {
    let name = input.name.trim();
    let category = input.category.trim();
    let quantity_text = input.quantity.trim();

    let fields = [
        (Field::Name, name),
        (Field::Category, category),
        (Field::Quantity, quantity_text),
    ];
    if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::EmptyField(*field));
    }

    let quantity = parse_quantity(quantity_text, Policy::Strict)?;
    if quantity <= 0 {
        return Err(ValidationError::InvalidQuantity {
            input: quantity_text.to_string(),
            reason: QuantityProblem::NotPositive,
            policy: Policy::Strict,
        });
    }

    Ok(Item::new(name, category, quantity))
}

fn validate_lenient(input: &FormInput) -> Result<Item, ValidationError> {
    let quantity = parse_quantity(&input.quantity, Policy::Lenient)?;
    Ok(Item::new(input.name.as_str(), input.category.as_str(), quantity))
}

fn parse_quantity(text: &str, policy: Policy) -> Result<i32, ValidationError> {
    text.parse::<i32>()
        .map_err(|_| ValidationError::InvalidQuantity {
            input: text.to_string(),
            reason: QuantityProblem::NotANumber,
            policy,
        })
}

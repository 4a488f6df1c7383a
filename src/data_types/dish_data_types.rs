use serde::{de, Deserialize, Deserializer, Serialize};

use super::DishType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DishInput {
    pub name: String,
    pub preparation_time: String,
    #[serde(flatten)]
    pub variant: DishVariant,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DishVariant {
    Pizza { no_of_slices: u32, diameter: f64 },
    Soup { spiciness_scale: u8 },
    Sandwich { slices_of_bread: u32 },
}

impl DishVariant {
    pub fn dish_type(&self) -> DishType {
        match self {
            DishVariant::Pizza { .. } => DishType::Pizza,
            DishVariant::Soup { .. } => DishType::Soup,
            DishVariant::Sandwich { .. } => DishType::Sandwich,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishCreated {
    #[serde(deserialize_with = "whole_number_id")]
    pub id: u64,
}

/// Accepts `42` as well as `42.0`, rejects fractions and negatives.
fn whole_number_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(id) = number.as_u64() {
        return Ok(id);
    }

    match number.as_f64() {
        Some(id) if id >= 0.0 && id.fract() == 0.0 && id < u64::MAX as f64 => Ok(id as u64),
        _ => Err(de::Error::custom(format!(
            "id {} is not a whole non-negative number",
            number
        ))),
    }
}

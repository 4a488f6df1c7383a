pub mod dish_data_types;

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use dish_data_types::{DishCreated, DishInput, DishVariant};

/// Every control the dish form knows about.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    PreparationTime,
    Type,
    NoOfSlices,
    Diameter,
    SpicinessScale,
    SlicesOfBread,
}

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::Name,
        FieldName::PreparationTime,
        FieldName::Type,
        FieldName::NoOfSlices,
        FieldName::Diameter,
        FieldName::SpicinessScale,
        FieldName::SlicesOfBread,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::PreparationTime => "preparation_time",
            FieldName::Type => "type",
            FieldName::NoOfSlices => "no_of_slices",
            FieldName::Diameter => "diameter",
            FieldName::SpicinessScale => "spiciness_scale",
            FieldName::SlicesOfBread => "slices_of_bread",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Dish name",
            FieldName::PreparationTime => "Preparation time",
            FieldName::Type => "Dish type",
            FieldName::NoOfSlices => "No. of slices",
            FieldName::Diameter => "Diameter",
            FieldName::SpicinessScale => "Spiciness",
            FieldName::SlicesOfBread => "Slices of bread",
        }
    }

    /// The dish type a field belongs to, `None` for the common fields.
    pub fn variant(&self) -> Option<DishType> {
        match self {
            FieldName::NoOfSlices | FieldName::Diameter => Some(DishType::Pizza),
            FieldName::SpicinessScale => Some(DishType::Soup),
            FieldName::SlicesOfBread => Some(DishType::Sandwich),
            _ => None,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DishType {
    Pizza,
    Soup,
    Sandwich,
}

impl DishType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DishType::Pizza => "pizza",
            DishType::Soup => "soup",
            DishType::Sandwich => "sandwich",
        }
    }

    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            DishType::Pizza => &[FieldName::NoOfSlices, FieldName::Diameter],
            DishType::Soup => &[FieldName::SpicinessScale],
            DishType::Sandwich => &[FieldName::SlicesOfBread],
        }
    }
}

impl fmt::Display for DishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DishType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pizza" => Ok(DishType::Pizza),
            "soup" => Ok(DishType::Soup),
            "sandwich" => Ok(DishType::Sandwich),
            _ => Err(()),
        }
    }
}

/// Server messages keyed by the field they belong to.
pub type FieldErrors = BTreeMap<FieldName, String>;

/// Lifecycle of the most recent submit attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded {
        id: u64,
    },
    Failed {
        field_errors: Option<FieldErrors>,
    },
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    pub fn success(&self) -> bool {
        matches!(self, SubmissionState::Succeeded { .. })
    }

    pub fn id(&self) -> Option<u64> {
        match self {
            SubmissionState::Succeeded { id } => Some(*id),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FieldErrors> {
        match self {
            SubmissionState::Failed { field_errors } => field_errors.as_ref(),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SubmissionState::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Applied(SubmissionState),
    // a newer submit was started before this one resolved
    Superseded,
}

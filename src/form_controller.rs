use std::collections::BTreeMap;

use crate::constants::{
    DEFAULT_DIAMETER, DEFAULT_NO_OF_SLICES, DEFAULT_PREPARATION_TIME, DEFAULT_SLICES_OF_BREAD,
    DEFAULT_SPICINESS_SCALE, ERROR_BANNER,
};
use crate::data_backend::DishApi;
use crate::data_types::{
    DishInput, DishType, DishVariant, FieldErrors, FieldName, SubmissionState, SubmitOutcome,
};
use crate::errors::{FormError, ValidationError};
use crate::submission_client::SubmissionClient;
use crate::validators::{
    validate_dish_type, validate_name, validate_non_negative_number, validate_positive_int,
    validate_preparation_time, validate_spiciness,
};

/// What a single control shows next to its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub error: bool,
    pub helper_text: Option<String>,
}

/// Field values and error display of the dish form.
///
/// Values are kept as the raw text the user typed. Variant fields of a type
/// that is not selected keep their value but are neither validated nor sent.
#[derive(Debug, Clone)]
pub struct DishForm {
    values: BTreeMap<FieldName, String>,
    local_errors: BTreeMap<FieldName, ValidationError>,
    server_errors: FieldErrors,
    last_attempt_failed: bool,
}

impl Default for DishForm {
    fn default() -> Self {
        let values = BTreeMap::from([
            (FieldName::Name, String::new()),
            (FieldName::PreparationTime, DEFAULT_PREPARATION_TIME.to_string()),
            (FieldName::Type, String::new()),
            (FieldName::NoOfSlices, DEFAULT_NO_OF_SLICES.to_string()),
            (FieldName::Diameter, DEFAULT_DIAMETER.to_string()),
            (FieldName::SpicinessScale, DEFAULT_SPICINESS_SCALE.to_string()),
            (FieldName::SlicesOfBread, DEFAULT_SLICES_OF_BREAD.to_string()),
        ]);

        DishForm {
            values,
            local_errors: BTreeMap::new(),
            server_errors: FieldErrors::new(),
            last_attempt_failed: false,
        }
    }
}

impl DishForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set_value(&mut self, field: FieldName, raw: impl Into<String>) {
        self.values.insert(field, raw.into());

        if field == FieldName::Type {
            self.drop_inactive_errors();
        }
    }

    pub fn select_type(&mut self, dish_type: DishType) {
        self.set_value(FieldName::Type, dish_type.as_str());
    }

    /// Currently selected type, `None` while unset or unknown.
    pub fn dish_type(&self) -> Option<DishType> {
        self.value(FieldName::Type).parse().ok()
    }

    /// Fields that are rendered, validated and submitted right now.
    pub fn active_fields(&self) -> Vec<FieldName> {
        let mut fields = vec![FieldName::Name, FieldName::PreparationTime, FieldName::Type];
        if let Some(dish_type) = self.dish_type() {
            fields.extend_from_slice(dish_type.fields());
        }
        fields
    }

    fn drop_inactive_errors(&mut self) {
        let active = self.dish_type();
        let is_active = |field: &FieldName| match field.variant() {
            None => true,
            Some(variant) => Some(variant) == active,
        };

        self.local_errors.retain(|field, _| is_active(field));
        self.server_errors.retain(|field, _| is_active(field));
    }

    /// Runs every active rule and builds the payload if all of them pass.
    pub fn validate(&self) -> Result<DishInput, BTreeMap<FieldName, ValidationError>> {
        let mut errors = BTreeMap::new();

        let name = validate_name(self.value(FieldName::Name))
            .map_err(|e| errors.insert(FieldName::Name, e))
            .ok();
        let preparation_time = validate_preparation_time(self.value(FieldName::PreparationTime))
            .map_err(|e| errors.insert(FieldName::PreparationTime, e))
            .ok();
        let variant = match validate_dish_type(self.value(FieldName::Type)) {
            Ok(dish_type) => self.validate_variant(dish_type, &mut errors),
            Err(e) => {
                errors.insert(FieldName::Type, e);
                None
            }
        };

        match (name, preparation_time, variant) {
            (Some(name), Some(preparation_time), Some(variant)) if errors.is_empty() => {
                Ok(DishInput {
                    name,
                    preparation_time,
                    variant,
                })
            }
            _ => Err(errors),
        }
    }

    fn validate_variant(
        &self,
        dish_type: DishType,
        errors: &mut BTreeMap<FieldName, ValidationError>,
    ) -> Option<DishVariant> {
        match dish_type {
            DishType::Pizza => {
                let no_of_slices = validate_positive_int(self.value(FieldName::NoOfSlices))
                    .map_err(|e| errors.insert(FieldName::NoOfSlices, e))
                    .ok();
                let diameter = validate_non_negative_number(self.value(FieldName::Diameter))
                    .map_err(|e| errors.insert(FieldName::Diameter, e))
                    .ok();
                Some(DishVariant::Pizza {
                    no_of_slices: no_of_slices?,
                    diameter: diameter?,
                })
            }
            DishType::Soup => validate_spiciness(self.value(FieldName::SpicinessScale))
                .map(|spiciness_scale| DishVariant::Soup { spiciness_scale })
                .map_err(|e| errors.insert(FieldName::SpicinessScale, e))
                .ok(),
            DishType::Sandwich => validate_positive_int(self.value(FieldName::SlicesOfBread))
                .map(|slices_of_bread| DishVariant::Sandwich { slices_of_bread })
                .map_err(|e| errors.insert(FieldName::SlicesOfBread, e))
                .ok(),
        }
    }

    /// Starts a submit attempt: clears the previous result and validates.
    ///
    /// On failure the offending fields are marked and nothing may be sent.
    pub fn prepare_submission(&mut self) -> Result<DishInput, FormError> {
        self.server_errors.clear();
        self.last_attempt_failed = false;

        match self.validate() {
            Ok(dish) => {
                self.local_errors.clear();
                Ok(dish)
            }
            Err(errors) => {
                log::debug!("Local validation failed for {:?}", errors.keys());
                self.local_errors = errors.clone();
                self.last_attempt_failed = true;
                Err(FormError::Invalid(errors))
            }
        }
    }

    /// Merges the result of a resolved attempt into the displayed errors.
    pub fn apply_outcome(&mut self, outcome: &SubmitOutcome) {
        let SubmitOutcome::Applied(state) = outcome else {
            return;
        };

        match state {
            SubmissionState::Failed { field_errors } => {
                self.last_attempt_failed = true;
                self.server_errors = field_errors.clone().unwrap_or_default();
                self.drop_inactive_errors();
            }
            SubmissionState::Succeeded { .. } => {
                self.last_attempt_failed = false;
                self.server_errors.clear();
            }
            SubmissionState::Idle | SubmissionState::Pending => {}
        }
    }

    /// Validates, sends through `client` and shows the server's answer.
    pub async fn submit<A: DishApi>(
        &mut self,
        client: &SubmissionClient<A>,
    ) -> Result<SubmitOutcome, FormError> {
        let dish = self.prepare_submission()?;
        let outcome = client.submit(&dish).await;
        self.apply_outcome(&outcome);
        Ok(outcome)
    }

    pub fn field_state(&self, field: FieldName) -> FieldState {
        let helper_text = self.server_errors.get(&field).cloned();
        FieldState {
            error: self.local_errors.contains_key(&field) || helper_text.is_some(),
            helper_text,
        }
    }

    pub fn local_errors(&self) -> &BTreeMap<FieldName, ValidationError> {
        &self.local_errors
    }

    pub fn server_errors(&self) -> &FieldErrors {
        &self.server_errors
    }

    /// Generic banner shown whenever the last attempt did not go through.
    pub fn banner(&self) -> Option<&'static str> {
        self.last_attempt_failed.then_some(ERROR_BANNER)
    }
}

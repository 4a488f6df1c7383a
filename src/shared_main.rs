use std::env;

use crate::data_types::SubmissionState;
use crate::form_controller::DishForm;

pub fn logger_init(module_path: &str) {
    let crate_level =
        if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default() == "debug"
        {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("dish_form_rs", crate_level)
        .filter_module(module_path, crate_level)
        .init();
}

/// Plain-text rendering of the active controls and the last result.
pub fn build_form_report(form: &DishForm, state: &SubmissionState) -> String {
    let mut report = String::new();

    if let Some(banner) = form.banner() {
        report += &format!("{}\n\n", banner);
    }

    for field in form.active_fields() {
        let field_state = form.field_state(field);
        let marker = if field_state.error { "✗" } else { " " };
        report += &format!("{} {}: {}\n", marker, field.label(), form.value(field));

        if let Some(helper_text) = field_state.helper_text {
            report += &format!("    → {}\n", helper_text);
        }
    }

    match state {
        SubmissionState::Idle => {}
        SubmissionState::Pending => report += "\nSubmitting...\n",
        SubmissionState::Succeeded { id } => report += &format!("\nDish saved with id {}\n", id),
        SubmissionState::Failed { .. } => report += "\nSubmission failed.\n",
    }

    report
}

use calcword_engine::{Calculator, Catalog, EditOutcome, RejectReason};
use calcword_types::Orientation;

use super::catalog::{example_entries, resource_entries};
use super::display::display_view_model;
use crate::presentation::view_models::{StatusBarViewModel, StatusLevel, TuiScreenViewModel};

pub fn present_screen(
    calc: &Calculator,
    catalog: &Catalog,
    status: StatusBarViewModel,
) -> TuiScreenViewModel {
    TuiScreenViewModel {
        display: display_view_model(calc, &[Orientation::Normal, Orientation::UpsideDown]),
        examples: example_entries(catalog),
        resources: resource_entries(),
        status,
    }
}

pub fn status_ready(calc: &Calculator) -> StatusBarViewModel {
    StatusBarViewModel {
        message: format!("Type a number ({} mode)", calc.mode()),
        level: StatusLevel::Info,
        max_len: calc.policy().max_len(),
    }
}

pub fn status_after_edit(calc: &Calculator, outcome: &EditOutcome) -> StatusBarViewModel {
    let max_len = calc.policy().max_len();
    match outcome {
        EditOutcome::Accepted { .. } => StatusBarViewModel {
            message: format!("{}/{} characters", calc.value().chars().count(), max_len),
            level: StatusLevel::Info,
            max_len,
        },
        EditOutcome::Rejected(RejectReason::MultipleSeparators) => StatusBarViewModel {
            message: "Only one decimal point".to_string(),
            level: StatusLevel::Warning,
            max_len,
        },
    }
}

pub fn status_example(
    calc: &Calculator,
    word: &str,
    outcome: &EditOutcome,
) -> StatusBarViewModel {
    let max_len = calc.policy().max_len();
    match outcome {
        EditOutcome::Accepted { .. } => StatusBarViewModel {
            message: format!("Showing {}", word),
            level: StatusLevel::Success,
            max_len,
        },
        EditOutcome::Rejected(RejectReason::MultipleSeparators) => StatusBarViewModel {
            message: format!("{} has more than one decimal point", word),
            level: StatusLevel::Warning,
            max_len,
        },
    }
}

pub fn status_cleared(calc: &Calculator) -> StatusBarViewModel {
    StatusBarViewModel {
        message: "Cleared".to_string(),
        level: StatusLevel::Info,
        max_len: calc.policy().max_len(),
    }
}

use calcword_engine::{Calculator, SegmentMap};
use calcword_types::{Orientation, RenderRequest};

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CellViewModel, CommandResultViewModel, DisplayPanelViewModel, DisplayViewModel, StatusBadge,
};

pub fn present_panel(request: &RenderRequest) -> DisplayPanelViewModel {
    DisplayPanelViewModel {
        orientation: request.orientation,
        text: request.to_string(),
        cells: request
            .iter()
            .map(|cell| CellViewModel {
                digit: cell.digit.as_char(),
                segments: SegmentMap::digit_pattern(cell.digit),
                decimal_dot: cell.has_decimal_dot,
            })
            .collect(),
    }
}

pub fn display_view_model(calc: &Calculator, orientations: &[Orientation]) -> DisplayViewModel {
    DisplayViewModel {
        value: calc.value().to_string(),
        typed: calc.typed().to_string(),
        mode: calc.mode(),
        width: calc.policy().width().cells(),
        panels: orientations
            .iter()
            .map(|&orientation| present_panel(&calc.render(orientation)))
            .collect(),
        reading: calcword_engine::read_upside_down(calc.value()),
    }
}

pub fn present_display(
    calc: &Calculator,
    orientations: &[Orientation],
) -> CommandResultViewModel<DisplayViewModel> {
    let content = display_view_model(calc, orientations);
    let shows_upside_down = orientations.iter().any(|o| o.is_upside_down());
    let turn_over = cmd::RENDER_BOTH.replace("<value>", &content.value);
    let has_reading = !content.reading.is_empty();

    let mut result = CommandResultViewModel::new(content);
    if !shows_upside_down && has_reading {
        result = result.with_tip("Turn the display over", turn_over);
    }
    result
}

/// Display for a value given on the command line; flags input the policy altered
pub fn present_render(
    requested: &str,
    calc: &Calculator,
    orientations: &[Orientation],
) -> CommandResultViewModel<DisplayViewModel> {
    let result = present_display(calc, orientations);
    if calc.typed() == requested {
        return result;
    }
    result.with_badge(StatusBadge::warning(format!(
        "Input shown as '{}'",
        calc.typed()
    )))
}

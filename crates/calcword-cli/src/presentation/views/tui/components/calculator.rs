//! Calculator page: input field, both displays, example selector, resources and status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::presentation::view_models::TuiScreenViewModel;
use crate::presentation::views::tui::{
    InputFieldView, ResourcesView, SevenSegmentView, StatusBarView,
};

use super::ExamplesComponent;

/// Actions the page emits to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorAction {
    Input(char),
    Backspace,
    Clear,
    SelectExample(usize),
    Quit,
}

pub struct CalculatorComponent {
    examples: ExamplesComponent,
}

impl CalculatorComponent {
    pub fn new() -> Self {
        Self {
            examples: ExamplesComponent::new(),
        }
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        screen: &TuiScreenViewModel,
    ) -> Option<CalculatorAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(CalculatorAction::Quit),
            KeyCode::Char('l') if ctrl => Some(CalculatorAction::Clear),
            KeyCode::Esc => Some(CalculatorAction::Quit),
            KeyCode::Delete => Some(CalculatorAction::Clear),
            KeyCode::Backspace => Some(CalculatorAction::Backspace),
            KeyCode::Up | KeyCode::Down | KeyCode::Enter => self
                .examples
                .handle_input(key, screen.examples.len())
                .map(CalculatorAction::SelectExample),
            KeyCode::Char(c) if !ctrl => Some(CalculatorAction::Input(c)),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, size: Rect, screen: &TuiScreenViewModel) {
        let rows = Layout::vertical([
            Constraint::Length(3), // Input
            Constraint::Length(5), // Normal display
            Constraint::Length(5), // Upside-down display
            Constraint::Min(6),    // Examples + resources
            Constraint::Length(3), // Status bar
        ])
        .split(size);

        f.render_widget(InputFieldView::new(&screen.display), rows[0]);

        for (panel, area) in screen.display.panels.iter().zip([rows[1], rows[2]]) {
            let mut view = SevenSegmentView::new(panel);
            if panel.orientation.is_upside_down() && !screen.display.reading.is_empty() {
                view = view.caption(&screen.display.reading);
            }
            f.render_widget(view, area);
        }

        let bottom = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[3]);
        self.examples.render(f, bottom[0], &screen.examples);
        f.render_widget(ResourcesView::new(&screen.resources), bottom[1]);

        f.render_widget(StatusBarView::new(&screen.status), rows[4]);
    }
}

impl Default for CalculatorComponent {
    fn default() -> Self {
        Self::new()
    }
}

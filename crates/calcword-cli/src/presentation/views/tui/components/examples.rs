//! Example selector (scrollable list with a highlighted row)

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::presentation::view_models::ExampleEntry;

pub struct ExamplesComponent {
    state: ListState,
}

impl ExamplesComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Move the selection; returns the index to apply on Enter
    pub fn handle_input(&mut self, key: KeyEvent, item_count: usize) -> Option<usize> {
        if item_count == 0 {
            self.state.select(None);
            return None;
        }

        let current = self.state.selected().unwrap_or(0).min(item_count - 1);
        match key.code {
            KeyCode::Up => {
                self.state.select(Some(current.saturating_sub(1)));
                None
            }
            KeyCode::Down => {
                self.state.select(Some((current + 1).min(item_count - 1)));
                None
            }
            KeyCode::Enter => Some(current),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, examples: &[ExampleEntry]) {
        let items: Vec<ListItem> = examples
            .iter()
            .map(|example| ListItem::new(format!("{} ({})", example.word, example.number)))
            .collect();

        let list = List::new(items)
            .block(Block::default().title(" Examples ").borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.state);
    }
}

impl Default for ExamplesComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut examples = ExamplesComponent::new();
        assert_eq!(examples.handle_input(key(KeyCode::Up), 3), None);
        assert_eq!(examples.selected(), Some(0));

        for _ in 0..5 {
            let _ = examples.handle_input(key(KeyCode::Down), 3);
        }
        assert_eq!(examples.selected(), Some(2));
        assert_eq!(examples.handle_input(key(KeyCode::Enter), 3), Some(2));
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let mut examples = ExamplesComponent::new();
        assert_eq!(examples.handle_input(key(KeyCode::Enter), 0), None);
        assert_eq!(examples.selected(), None);
    }
}

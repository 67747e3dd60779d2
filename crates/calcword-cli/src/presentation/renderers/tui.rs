//! TUI Renderer for the interactive calculator
//!
//! ## Design:
//! - Renderer owns the `Calculator` (the only domain state) and the example catalog
//! - Components own UI state and turn keys into `CalculatorAction`s
//! - Every frame is drawn from a fresh `TuiScreenViewModel`

use std::io;
use std::time::Duration;

use anyhow::Result;
use calcword_engine::{Calculator, Catalog};
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

use crate::presentation::presenters::{
    present_screen, status_after_edit, status_cleared, status_example, status_ready,
};
use crate::presentation::view_models::{StatusBarViewModel, TuiScreenViewModel};
use crate::presentation::views::tui::{CalculatorAction, CalculatorComponent};

pub struct TuiRenderer {
    calculator: Calculator,
    catalog: Catalog,
    page: CalculatorComponent,
    status: StatusBarViewModel,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(calculator: Calculator, catalog: Catalog) -> Self {
        let status = status_ready(&calculator);
        Self {
            calculator,
            catalog,
            page: CalculatorComponent::new(),
            status,
            should_quit: false,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Take over the terminal until the user quits
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(250))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }
        }
        Ok(())
    }

    pub fn screen(&self) -> TuiScreenViewModel {
        present_screen(&self.calculator, &self.catalog, self.status.clone())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let screen = self.screen();
        if let Some(action) = self.page.handle_input(key, &screen) {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: CalculatorAction) {
        match action {
            CalculatorAction::Input(c) => {
                let outcome = self.calculator.push(c);
                self.status = status_after_edit(&self.calculator, &outcome);
            }
            CalculatorAction::Backspace => {
                let outcome = self.calculator.backspace();
                self.status = status_after_edit(&self.calculator, &outcome);
            }
            CalculatorAction::Clear => {
                self.calculator.clear();
                self.status = status_cleared(&self.calculator);
            }
            CalculatorAction::SelectExample(index) => {
                if let Some(example) = self.catalog.get(index) {
                    let outcome = self.calculator.select_example(example);
                    self.status = status_example(&self.calculator, &example.word, &outcome);
                }
            }
            CalculatorAction::Quit => {
                tracing::debug!("quit requested");
                self.should_quit = true;
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let screen = self.screen();
        self.page.render(f, f.area(), &screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcword_engine::InputPolicy;
    use crate::presentation::view_models::StatusLevel;
    use calcword_types::{DisplayWidth, Example, InputMode};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn renderer(mode: InputMode) -> TuiRenderer {
        let calc = Calculator::new(InputPolicy::new(mode, DisplayWidth::DEFAULT));
        TuiRenderer::new(calc, Catalog::builtin(mode))
    }

    #[test]
    fn test_typing_updates_calculator() {
        let mut tui = renderer(InputMode::DigitsOnly);
        for c in "0773a4".chars() {
            tui.handle_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(tui.calculator().value(), "07734");
        assert_eq!(tui.screen().display.reading, "hELLO");
    }

    #[test]
    fn test_second_separator_warns() {
        let mut tui = renderer(InputMode::DigitsOnly);
        for c in "1..".chars() {
            tui.handle_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(tui.calculator().value(), "1.");
        assert_eq!(tui.screen().status.message, "Only one decimal point");
    }

    #[test]
    fn test_example_selection_then_clear() {
        let mut tui = renderer(InputMode::DigitsOnly);
        tui.handle_key_event(key(KeyCode::Down));
        tui.handle_key_event(key(KeyCode::Down));
        tui.handle_key_event(key(KeyCode::Enter));
        assert_eq!(tui.calculator().value(), "5318008");
        assert_eq!(tui.screen().status.message, "Showing BOOBIES");

        tui.handle_key_event(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(tui.calculator().value(), "");
        assert!(tui.screen().display.panels.iter().all(|p| p.text.trim().is_empty()));
    }

    #[test]
    fn test_malformed_extra_example_keeps_value() {
        let calc = Calculator::new(InputPolicy::default());
        let catalog =
            Catalog::builtin(InputMode::DigitsOnly).with_extra([Example::new("BAD", "1.2.3")]);
        let bad = catalog.examples().len() - 1;
        let mut tui = TuiRenderer::new(calc, catalog);
        tui.handle_key_event(key(KeyCode::Char('7')));

        tui.apply(CalculatorAction::SelectExample(bad));
        assert_eq!(tui.calculator().value(), "7");
        assert_eq!(tui.screen().status.level, StatusLevel::Warning);
        assert_eq!(tui.screen().status.message, "BAD has more than one decimal point");
    }

    #[test]
    fn test_letters_mode_converts_keystrokes() {
        let mut tui = renderer(InputMode::LettersAndDigits);
        for c in "OLLEH".chars() {
            tui.handle_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(tui.calculator().typed(), "OLLEH");
        assert_eq!(tui.calculator().value(), "07734");
    }

    #[test]
    fn test_escape_quits() {
        let mut tui = renderer(InputMode::DigitsOnly);
        assert!(!tui.should_quit());
        tui.handle_key_event(key(KeyCode::Esc));
        assert!(tui.should_quit());
    }

    #[test]
    fn test_draws_full_screen() {
        let mut tui = renderer(InputMode::DigitsOnly);
        for c in "07734".chars() {
            tui.handle_key_event(key(KeyCode::Char(c)));
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| tui.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("Input (digits)"));
        assert!(text.contains("Upside down · hELLO"));
        assert!(text.contains("HELLO (07734)"));
        assert!(text.contains("Resources"));
    }
}

//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    if app.editing_field.is_some() {
        match key.code {
            KeyCode::Enter => app.finish_field_edit(),
            KeyCode::Tab => app.next_edit_field(),
            KeyCode::Esc => app.cancel_field_edit(),
            KeyCode::Backspace => app.pop_field_char(),
            KeyCode::Char(c) => app.push_field_char(c),
            _ => {}
        }
        return;
    }

    if app.editing_description {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.editing_description = false,
            KeyCode::Backspace => app.pop_description(),
            KeyCode::Char(c) => app.push_description(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char(' ') => app.toggle_current(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.change_quantity(1),
        KeyCode::Char('-') | KeyCode::Left => app.change_quantity(-1),
        KeyCode::Char('p') => app.cycle_project_type(),
        KeyCode::Char('e') => app.editing_description = true,
        KeyCode::Char('f') | KeyCode::Tab => app.begin_field_edit(),
        KeyCode::Char('m') => app.toggle_chassis(),
        KeyCode::Enter | KeyCode::Char('c') => app.calculate(),
        KeyCode::Char('1') => app.load_preset("weekend_cabin"),
        KeyCode::Char('2') => app.load_preset("corner_shop"),
        KeyCode::Char('3') => app.load_preset("camper_van"),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizerConfig;
    use crate::selection::SelectionField;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn field_edit_keys_change_usage() {
        let mut app = App::new("weekend_cabin", SizerConfig::default());
        press(&mut app, KeyCode::Char('f'));
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(
            app.editing_field.as_ref().map(|e| e.field),
            Some(SelectionField::Usage)
        );
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('8'));
        // 'q' is text while editing, not quit
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Enter);
        assert!(!app.quit);
        assert_eq!(app.form.get("Lamps").map(|s| s.usage_hours), Some(8.0));

        press(&mut app, KeyCode::Enter);
        // 288 Wh of lamps instead of 144
        let autonomy = app.report.as_ref().map(|r| r.result.required_autonomy_wh);
        assert_eq!(autonomy, Some(2856.0));
    }

    #[test]
    fn escape_discards_field_edit() {
        let mut app = App::new("weekend_cabin", SizerConfig::default());
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Esc);
        assert!(app.editing_field.is_none());
        assert!(!app.quit);
        assert_eq!(app.form.get("Lamps").map(|s| s.power_w), Some(9.0));
    }
}

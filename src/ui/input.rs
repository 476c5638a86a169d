use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if !app.cancel_drag() {
                app.request_quit();
            }
        }
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.step_previous(),
        KeyCode::Right | KeyCode::Char('l') => app.step_next(),
        KeyCode::Home => app.jump_to(0),
        KeyCode::End => app.jump_to(usize::MAX),
        KeyCode::Char(ch) => {
            if let Some(digit) = ch.to_digit(10).filter(|d| *d > 0) {
                app.jump_to(digit as usize - 1);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

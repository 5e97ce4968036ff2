//! Input events: [`Msg`], [`Key`], [`MouseButton`].

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtButton, MouseEventKind,
};

/// A keyboard key the visualizer cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    /// A printable character.
    Char(char),
}

/// A held mouse button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) button.
    Main,
    /// Secondary (right) button.
    Secondary,
}

/// An input message delivered to the visualizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    KeyDown(Key),
    /// A button pressed or dragged over terminal cell (`x`, `y`).
    Mouse { button: MouseButton, x: u16, y: u16 },
    /// The terminal was resized.
    Screen { width: u16, height: u16 },
    /// Ctrl-C.
    Quit,
}

/// Maps a crossterm [`KeyCode`] to a [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Translate a crossterm event; events the visualizer ignores map to `None`.
pub fn translate(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if kind == KeyEventKind::Release {
                return None;
            }
            if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
                return Some(Msg::Quit);
            }
            to_key(code).map(Msg::KeyDown)
        }
        Event::Mouse(me) => {
            let button = match me.kind {
                MouseEventKind::Down(b) | MouseEventKind::Drag(b) => match b {
                    CtButton::Left => MouseButton::Main,
                    CtButton::Right => MouseButton::Secondary,
                    CtButton::Middle => return None,
                },
                _ => return None,
            };
            Some(Msg::Mouse {
                button,
                x: me.column,
                y: me.row,
            })
        }
        Event::Resize(width, height) => Some(Msg::Screen { width, height }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys() {
        assert_eq!(
            translate(key(KeyCode::Char('M'), KeyModifiers::SHIFT, KeyEventKind::Press)),
            Some(Msg::KeyDown(Key::Char('m')))
        );
        assert_eq!(
            translate(key(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Press)),
            Some(Msg::KeyDown(Key::Space))
        );
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press)),
            Some(Msg::Quit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('1'), KeyModifiers::NONE, KeyEventKind::Release)),
            None
        );
        assert_eq!(
            translate(key(KeyCode::F(1), KeyModifiers::NONE, KeyEventKind::Press)),
            None
        );
    }

    #[test]
    fn mouse_press_and_drag() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(CtButton::Left), 4, 2)),
            Some(Msg::Mouse {
                button: MouseButton::Main,
                x: 4,
                y: 2
            })
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Drag(CtButton::Right), 1, 1)),
            Some(Msg::Mouse {
                button: MouseButton::Secondary,
                x: 1,
                y: 1
            })
        );
        assert_eq!(translate(mouse(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(
            translate(mouse(MouseEventKind::Up(CtButton::Left), 1, 1)),
            None
        );
    }
}

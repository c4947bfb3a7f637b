use expanding_editor_core::{Key, KeyPress, Modifiers};
use iced::keyboard::{self, key::Named};

/// Translates an iced key-down into the toolkit-free key model.
pub fn key_press(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> KeyPress {
    let key = match key {
        keyboard::Key::Named(Named::Enter) => Key::Return,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Character(c) => c.as_str().chars().next().map_or(Key::Other, Key::Character),
        _ => Key::Other,
    };

    KeyPress::new(
        key,
        Modifiers {
            shift: modifiers.shift(),
            control: modifiers.control(),
            alt: modifiers.alt(),
            logo: modifiers.logo(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_maps_to_return() {
        let press = key_press(
            &keyboard::Key::Named(Named::Enter),
            keyboard::Modifiers::empty(),
        );
        assert_eq!(press, KeyPress::plain(Key::Return));
    }

    #[test]
    fn shift_is_carried() {
        let press = key_press(
            &keyboard::Key::Named(Named::Enter),
            keyboard::Modifiers::SHIFT,
        );
        assert_eq!(press, KeyPress::new(Key::Return, Modifiers::SHIFT));
    }

    #[test]
    fn characters_and_other_keys() {
        let press = key_press(
            &keyboard::Key::Character("a".into()),
            keyboard::Modifiers::empty(),
        );
        assert_eq!(press.key, Key::Character('a'));

        let press = key_press(
            &keyboard::Key::Named(Named::Tab),
            keyboard::Modifiers::empty(),
        );
        assert_eq!(press.key, Key::Other);
    }
}

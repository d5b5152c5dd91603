//! Navigation-related state types.
//!
//! This module contains the focus order of the registration screen.

use crate::signup::Field;

/// Specifying the focusable elements of the registration screen, in order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormFocus {
    Name,
    Email,
    PhoneNumber,
    MembershipType,
    Submit,
    SignIn,
    Terms,
    Privacy,
}

const FOCUS_ORDER: [FormFocus; 8] = [
    FormFocus::Name,
    FormFocus::Email,
    FormFocus::PhoneNumber,
    FormFocus::MembershipType,
    FormFocus::Submit,
    FormFocus::SignIn,
    FormFocus::Terms,
    FormFocus::Privacy,
];

impl FormFocus {
    fn position(self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> FormFocus {
        FOCUS_ORDER[(self.position() + 1) % FOCUS_ORDER.len()]
    }

    pub fn previous(self) -> FormFocus {
        FOCUS_ORDER[(self.position() + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
    }

    /// Return the form field edited while this element has focus.
    ///
    pub fn field(self) -> Option<Field> {
        match self {
            FormFocus::Name => Some(Field::Name),
            FormFocus::Email => Some(Field::Email),
            FormFocus::PhoneNumber => Some(Field::PhoneNumber),
            FormFocus::MembershipType => Some(Field::MembershipType),
            _ => None,
        }
    }

    /// Whether typing edits the focused element.
    ///
    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            FormFocus::Name | FormFocus::Email | FormFocus::PhoneNumber
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        let mut focus = FormFocus::Name;
        for _ in 0..FOCUS_ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::Name);
        assert_eq!(FormFocus::Name.previous(), FormFocus::Privacy);
        assert_eq!(FormFocus::Privacy.next(), FormFocus::Name);
        assert_eq!(FormFocus::Submit.previous(), FormFocus::MembershipType);
    }

    #[test]
    fn test_focus_fields() {
        assert_eq!(FormFocus::Email.field(), Some(Field::Email));
        assert_eq!(FormFocus::MembershipType.field(), Some(Field::MembershipType));
        assert_eq!(FormFocus::Submit.field(), None);
        assert!(FormFocus::PhoneNumber.is_text_input());
        assert!(!FormFocus::MembershipType.is_text_input());
        assert!(!FormFocus::Terms.is_text_input());
    }
}

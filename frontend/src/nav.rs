use std::rc::Rc;

use yew::functional::Reducible;

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    LinkClicked,
    /// A click anywhere on the document. `inside` is true when it landed on
    /// the panel or the menu button.
    OutsideClick { inside: bool },
}

impl MenuState {
    pub fn apply(self, action: MenuAction) -> MenuState {
        match action {
            MenuAction::Toggle => MenuState { open: !self.open },
            MenuAction::LinkClicked => MenuState { open: false },
            MenuAction::OutsideClick { inside: false } if self.open => MenuState { open: false },
            MenuAction::OutsideClick { .. } => self,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            log::debug!("Menu {}", if next.open { "opened" } else { "closed" });
            Rc::new(next)
        }
    }
}

/// Classes for the panel and the toggle button; both carry `active` when open.
pub fn menu_classes(open: bool) -> (&'static str, &'static str) {
    if open {
        ("nav active", "mobile-menu-btn active")
    } else {
        ("nav", "mobile-menu-btn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_by_default() {
        assert!(!MenuState::default().open);
    }

    #[test]
    fn even_toggles_restore_state() {
        let start = MenuState::default();
        let mut state = start;
        for _ in 0..4 {
            state = state.apply(MenuAction::Toggle);
        }
        assert_eq!(state, start);
        assert!(start.apply(MenuAction::Toggle).open);
    }

    #[test]
    fn link_click_forces_closed() {
        let open = MenuState { open: true };
        assert!(!open.apply(MenuAction::LinkClicked).open);
        assert!(!MenuState::default().apply(MenuAction::LinkClicked).open);
    }

    #[test]
    fn outside_click_closes_only_when_open() {
        let open = MenuState { open: true };
        assert!(!open.apply(MenuAction::OutsideClick { inside: false }).open);
        assert!(open.apply(MenuAction::OutsideClick { inside: true }).open);

        let closed = MenuState::default();
        assert_eq!(closed.apply(MenuAction::OutsideClick { inside: false }), closed);
    }

    #[test]
    fn reducer_keeps_allocation_on_noop() {
        let state = Rc::new(MenuState::default());
        let next = state.clone().reduce(MenuAction::OutsideClick { inside: false });
        assert!(Rc::ptr_eq(&state, &next));

        let toggled = state.reduce(MenuAction::Toggle);
        assert!(toggled.open);
    }

    #[test]
    fn classes_mark_both_elements() {
        assert_eq!(menu_classes(true), ("nav active", "mobile-menu-btn active"));
        assert_eq!(menu_classes(false), ("nav", "mobile-menu-btn"));
    }
}

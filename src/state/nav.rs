use std::rc::Rc;
use yew::prelude::*;

/// Vertical offset in px past which the nav bar turns solid.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTheme {
    /// Over the hero image: no background, light text.
    Transparent,
    /// Scrolled: white blurred background, dark text.
    Solid,
}

impl NavTheme {
    pub fn bar_class(self) -> &'static str {
        match self {
            NavTheme::Transparent => "top-nav",
            NavTheme::Solid => "top-nav scrolled",
        }
    }
}

pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    LinkChosen,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    pub is_scrolled: bool,
    pub is_menu_open: bool,
}

impl NavState {
    pub fn theme(&self) -> NavTheme {
        if self.is_scrolled {
            NavTheme::Solid
        } else {
            NavTheme::Transparent
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled(y) => NavState {
                is_scrolled: y > SCROLL_THRESHOLD,
                ..(*self).clone()
            },
            NavAction::ToggleMenu => NavState {
                is_menu_open: !self.is_menu_open,
                ..(*self).clone()
            },
            NavAction::LinkChosen => NavState {
                is_menu_open: false,
                ..(*self).clone()
            },
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: NavState, actions: Vec<NavAction>) -> NavState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn scroll_threshold_is_strictly_greater_than_fifty() {
        for (y, expected) in [(0.0, false), (50.0, false), (50.5, true), (51.0, true), (1200.0, true)] {
            let state = apply(NavState::default(), vec![NavAction::Scrolled(y)]);
            assert_eq!(state.is_scrolled, expected, "scroll_y = {y}");
        }
    }

    #[test]
    fn scrolling_back_to_top_restores_transparent_theme() {
        let state = apply(
            NavState::default(),
            vec![NavAction::Scrolled(400.0), NavAction::Scrolled(10.0)],
        );
        assert!(!state.is_scrolled);
        assert_eq!(state.theme(), NavTheme::Transparent);
    }

    #[test]
    fn theme_follows_scroll_only() {
        let scrolled = apply(NavState::default(), vec![NavAction::Scrolled(51.0)]);
        assert_eq!(scrolled.theme(), NavTheme::Solid);
        assert_eq!(scrolled.theme().bar_class(), "top-nav scrolled");

        let open = apply(NavState::default(), vec![NavAction::ToggleMenu]);
        assert_eq!(open.theme(), NavTheme::Transparent);
    }

    #[test]
    fn toggle_flips_menu() {
        let once = apply(NavState::default(), vec![NavAction::ToggleMenu]);
        assert!(once.is_menu_open);
        let twice = apply(once, vec![NavAction::ToggleMenu]);
        assert!(!twice.is_menu_open);
    }

    #[test]
    fn choosing_a_link_closes_an_open_menu() {
        let state = apply(
            NavState::default(),
            vec![NavAction::ToggleMenu, NavAction::LinkChosen],
        );
        assert!(!state.is_menu_open);

        let closed = apply(NavState::default(), vec![NavAction::LinkChosen]);
        assert!(!closed.is_menu_open);
    }

    #[test]
    fn menu_survives_scrolling() {
        let state = apply(
            NavState::default(),
            vec![NavAction::ToggleMenu, NavAction::Scrolled(300.0)],
        );
        assert!(state.is_menu_open);
        assert!(state.is_scrolled);
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let state = Rc::new(NavState::default());
        let same = Rc::clone(&state).reduce(NavAction::Scrolled(20.0));
        assert!(Rc::ptr_eq(&state, &same));
    }
}

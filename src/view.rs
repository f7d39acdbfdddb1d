// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Counter view: the displayed label and the three controls
//!
//! This is toolkit-independent; [`crate::window`] renders it with kas.

use std::cell::RefCell;
use std::fmt;

/// Identifies one of the view's controls
///
/// Buttons in the window emit this as their message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Increment,
    Decrement,
    Reset,
}

impl Action {
    /// Visible button text
    pub fn label(self) -> &'static str {
        match self {
            Action::Increment => "Increment (+)",
            Action::Decrement => "Decrement (-)",
            Action::Reset => "Reset",
        }
    }

    /// Button text with an access key marked by `&`
    pub fn access_label(self) -> &'static str {
        match self {
            Action::Increment => "&Increment (+)",
            Action::Decrement => "&Decrement (-)",
            Action::Reset => "&Reset",
        }
    }
}

/// A triggerable control
///
/// Responses run in the order they were registered.
pub struct Control {
    action: Action,
    responses: RefCell<Vec<Box<dyn Fn()>>>,
}

impl Control {
    fn new(action: Action) -> Self {
        Control {
            action,
            responses: RefCell::new(Vec::new()),
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Register a response to run whenever this control is triggered
    pub fn on_trigger(&self, response: impl Fn() + 'static) {
        self.responses.borrow_mut().push(Box::new(response));
    }

    /// Run all registered responses
    ///
    /// A response must not register further responses on the same control.
    pub fn trigger(&self) {
        log::debug!("Control::trigger: {:?}", self.action);
        for response in self.responses.borrow().iter() {
            response();
        }
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Control")
            .field("action", &self.action)
            .field("responses", &self.responses.borrow().len())
            .finish()
    }
}

pub fn format_count(value: i32) -> String {
    format!("Count: {}", value)
}

/// The display surface
///
/// Never reads the counter: it shows whatever value it was last told.
#[derive(Debug)]
pub struct CounterView {
    text: RefCell<String>,
    increment: Control,
    decrement: Control,
    reset: Control,
}

impl Default for CounterView {
    fn default() -> Self {
        CounterView::new()
    }
}

impl CounterView {
    pub fn new() -> Self {
        CounterView {
            text: RefCell::new(format_count(0)),
            increment: Control::new(Action::Increment),
            decrement: Control::new(Action::Decrement),
            reset: Control::new(Action::Reset),
        }
    }

    /// Replace the label text with `value`
    pub fn refresh(&self, value: i32) {
        log::trace!("CounterView::refresh: {}", value);
        *self.text.borrow_mut() = format_count(value);
    }

    /// Current label text
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn increment_control(&self) -> &Control {
        &self.increment
    }

    pub fn decrement_control(&self) -> &Control {
        &self.decrement
    }

    pub fn reset_control(&self) -> &Control {
        &self.reset
    }

    pub fn control(&self, action: Action) -> &Control {
        match action {
            Action::Increment => &self.increment,
            Action::Decrement => &self.decrement,
            Action::Reset => &self.reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const ALL: [Action; 3] = [Action::Increment, Action::Decrement, Action::Reset];

    #[test]
    fn initial_text() {
        assert_eq!(CounterView::new().text(), "Count: 0");
    }

    #[test]
    fn refresh_sets_text() {
        let view = CounterView::new();
        view.refresh(-7);
        assert_eq!(view.text(), "Count: -7");
        view.refresh(i32::MAX);
        assert_eq!(view.text(), format!("Count: {}", i32::MAX));
    }

    #[test]
    fn control_lookup() {
        let view = CounterView::new();
        for action in ALL.iter().copied() {
            assert_eq!(view.control(action).action(), action);
        }
        assert_eq!(view.increment_control().action(), Action::Increment);
        assert_eq!(view.decrement_control().action(), Action::Decrement);
        assert_eq!(view.reset_control().action(), Action::Reset);
    }

    #[test]
    fn labels() {
        assert_eq!(Action::Increment.label(), "Increment (+)");
        assert_eq!(Action::Decrement.label(), "Decrement (-)");
        assert_eq!(Action::Reset.label(), "Reset");
        for action in ALL.iter().copied() {
            assert_eq!(action.access_label().replacen('&', "", 1), action.label());
        }
    }

    #[test]
    fn responses_run_in_order() {
        let view = CounterView::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let order = order.clone();
            view.reset_control().on_trigger(move || order.borrow_mut().push(i));
        }
        view.reset_control().trigger();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn controls_are_independent() {
        let view = CounterView::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        view.increment_control().on_trigger(move || h.set(h.get() + 1));
        view.decrement_control().trigger();
        view.reset_control().trigger();
        assert_eq!(hits.get(), 0);
        view.increment_control().trigger();
        assert_eq!(hits.get(), 1);
    }
}

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Controller: binds view controls to counter updates

use crate::model::Counter;
use crate::view::{Control, CounterView};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type SharedCounter = Rc<RefCell<Counter>>;

/// Wires a [`CounterView`] to a [`Counter`]
///
/// Responses hold only weak references; once either the counter or the view
/// is dropped they do nothing.
#[derive(Debug)]
pub struct CounterController {
    counter: Weak<RefCell<Counter>>,
    view: Weak<CounterView>,
}

impl CounterController {
    pub fn new(counter: &SharedCounter, view: &Rc<CounterView>) -> Self {
        let controller = CounterController {
            counter: Rc::downgrade(counter),
            view: Rc::downgrade(view),
        };

        controller.bind(view.increment_control(), Counter::increment);
        controller.bind(view.decrement_control(), Counter::decrement);
        controller.bind(view.reset_control(), Counter::reset);

        controller.update_view();
        controller
    }

    fn bind(&self, control: &Control, op: fn(&mut Counter)) {
        let action = control.action();
        let counter = self.counter.clone();
        let view = self.view.clone();
        control.on_trigger(move || {
            let (counter, view) = match (counter.upgrade(), view.upgrade()) {
                (Some(c), Some(v)) => (c, v),
                _ => return,
            };
            let value = {
                let mut counter = counter.borrow_mut();
                op(&mut *counter);
                counter.get()
            };
            log::debug!("{}: count = {}", action.label(), value);
            view.refresh(value);
        });
    }

    /// Refresh the view from the counter's current value
    pub fn update_view(&self) {
        if let (Some(counter), Some(view)) = (self.counter.upgrade(), self.view.upgrade()) {
            let value = counter.borrow().get();
            view.refresh(value);
        }
    }
}

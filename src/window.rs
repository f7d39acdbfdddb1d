// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Counter window

use crate::view::{Action, CounterView};
use kas::prelude::*;
use kas::widgets::{AccessLabel, Adapt, Button, Text};
use std::rc::Rc;

pub const TITLE: &str = "Counter Application - MVC Example";

/// Font size for the whole window (pt)
pub const FONT_SIZE: f32 = 24.0;

fn button(action: Action) -> Button<AccessLabel> {
    Button::label_msg(action.access_label(), action)
}

/// Render `view` as a kas window
///
/// Buttons push their [`Action`]; the adapter triggers the matching control
/// then updates the label from the view.
pub fn window(view: Rc<CounterView>) -> Window<()> {
    let tree = kas::column![
        align!(center, Text::new(|_, view: &Rc<CounterView>| view.text())),
        kas::row![
            button(Action::Increment),
            button(Action::Decrement),
            button(Action::Reset),
        ]
        .map_any(),
    ];

    let ui = Adapt::new(tree, view).on_message(|_, view, action: Action| {
        view.control(action).trigger();
    });
    Window::new(ui, TITLE)
}

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Counter: model, view and controller

mod controller;
mod model;
mod view;
mod window;

use controller::{CounterController, SharedCounter};
use model::Counter;
use std::cell::RefCell;
use std::rc::Rc;
use view::CounterView;

fn main() -> kas::app::Result<()> {
    env_logger::init();

    // Everything below runs on the event-loop thread; Rc keeps it there.
    let counter: SharedCounter = Rc::new(RefCell::new(Counter::new()));
    let view = Rc::new(CounterView::new());
    let _controller = CounterController::new(&counter, &view);
    log::info!("{}: {}", window::TITLE, view.text());

    let theme = kas::theme::SimpleTheme::new().with_font_size(window::FONT_SIZE);
    kas::app::Default::with_theme(theme)
        .build(())?
        .with(window::window(view))
        .run()
}

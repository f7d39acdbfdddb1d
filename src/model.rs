// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Counter model

/// A single signed count, starting at zero
///
/// Arithmetic wraps at the bounds of `i32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    value: i32,
}

impl Counter {
    pub fn new() -> Self {
        Counter::default()
    }

    pub fn get(&self) -> i32 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.wrapping_sub(1);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn set(&mut self, value: i32) {
        self.value = value;
    }
}

use std::sync::{Mutex, PoisonError};

use vt_core::ports::NavigatorPort;
use vt_core::{Location, Route};

/// In-process navigation history.
///
/// 内存导航栈。
///
/// The stack is never empty: replacing the root swaps it in place.
#[derive(Debug)]
pub struct MemoryNavigator {
    stack: Mutex<Vec<Location>>,
}

impl MemoryNavigator {
    pub fn new(initial: Location) -> Self {
        Self {
            stack: Mutex::new(vec![initial]),
        }
    }

    pub fn history(&self) -> Vec<Location> {
        self.stack
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Pops the top location unless it is the root. Returns the new current one.
    pub fn back(&self) -> Location {
        let mut stack = self.stack.lock().unwrap_or_else(PoisonError::into_inner);
        if stack.len() > 1 {
            stack.pop();
        }
        top(&stack)
    }
}

impl Default for MemoryNavigator {
    /// Cold start lands on sign-in; the guard moves an authenticated user on.
    fn default() -> Self {
        Self::new(Location::new(Route::SIGN_IN))
    }
}

fn top(stack: &[Location]) -> Location {
    stack
        .last()
        .cloned()
        .unwrap_or_else(|| Location::new(Route::SIGN_IN))
}

impl NavigatorPort for MemoryNavigator {
    fn current(&self) -> Location {
        top(&self.stack.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn push(&self, location: Location) {
        self.stack
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location);
    }

    fn replace(&self, location: Location) {
        let mut stack = self.stack.lock().unwrap_or_else(PoisonError::into_inner);
        stack.pop();
        stack.push(location);
    }
}

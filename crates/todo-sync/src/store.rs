//! State Store Abstraction
//!
//! How the controller reaches the [`TodoState`] it reconciles into.
//! The UI backs this with a reactive signal; native hosts and tests use
//! `Rc<RefCell<TodoState>>`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::TodoState;

/// Shared handle to the authoritative state
pub trait TodoStore: Clone {
    /// Read the state. `None` once the backing storage is gone.
    fn view_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R>;

    /// Mutate the state. A no-op once the backing storage is gone.
    fn mutate(&self, f: impl FnOnce(&mut TodoState));
}

impl TodoStore for Rc<RefCell<TodoState>> {
    fn view_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn mutate(&self, f: impl FnOnce(&mut TodoState)) {
        f(&mut self.borrow_mut());
    }
}

use std::cell::RefCell;
use std::rc::Rc;

/// Loading and error state of the requests issued through one helper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestStatus {
    /// True while a request is in flight.
    pub is_loading: bool,
    /// Message of the most recent failure. Cleared when a request starts.
    pub error: Option<String>,
}

/// Somewhere to record request state: a [`SharedStatus`] outside of a UI
/// framework, or a component's state handles inside one.
pub trait StatusSink {
    fn set_loading(&self, is_loading: bool);
    fn set_error(&self, error: Option<String>);
}

/// Request state shared between a helper and the in-flight requests it
/// started. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct SharedStatus(Rc<RefCell<RequestStatus>>);

impl SharedStatus {
    pub fn snapshot(&self) -> RequestStatus {
        self.0.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.0.borrow().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.0.borrow().error.clone()
    }
}

impl StatusSink for SharedStatus {
    fn set_loading(&self, is_loading: bool) {
        self.0.borrow_mut().is_loading = is_loading;
    }

    fn set_error(&self, error: Option<String>) {
        self.0.borrow_mut().error = error;
    }
}

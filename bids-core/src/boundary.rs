use std::collections::HashSet;

/// Error value handed to a boundary by the hosting shell. `digest` is the
/// framework's optional diagnostic identifier for the error instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryError {
    pub message: String,
    pub digest: Option<String>,
}

impl BoundaryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            digest: None,
        }
    }

    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = Some(digest.into());
        self
    }
}

/// The static retry affordance a boundary renders. The error cause is never
/// shown to the end user, only a generic try-again message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryView {
    pub heading: String,
    pub detail: String,
    pub retry_label: String,
}

/// Invoked by the hosting shell when an error reaches the boundary.
/// Boundaries do not classify the error and never retry on their own.
pub trait ErrorBoundary {
    fn handle(&mut self, error: &BoundaryError) -> BoundaryView;
}

/// Dashboard-scoped boundary: presentational only.
pub struct DashboardBoundary;

impl ErrorBoundary for DashboardBoundary {
    fn handle(&mut self, _error: &BoundaryError) -> BoundaryView {
        BoundaryView {
            heading: "Something went wrong".into(),
            detail: "An unexpected error occurred while loading this page.".into(),
            retry_label: "Try again".into(),
        }
    }
}

/// Global boundary: same display duty, plus a one-time logging side effect
/// per error instance the first time it is shown.
pub struct GlobalBoundary {
    seen: HashSet<String>,
    sink: Box<dyn FnMut(&BoundaryError)>,
}

impl GlobalBoundary {
    pub fn new(sink: impl FnMut(&BoundaryError) + 'static) -> Self {
        Self {
            seen: HashSet::new(),
            sink: Box::new(sink),
        }
    }

    fn instance_key(error: &BoundaryError) -> String {
        error
            .digest
            .clone()
            .unwrap_or_else(|| error.message.clone())
    }
}

impl ErrorBoundary for GlobalBoundary {
    fn handle(&mut self, error: &BoundaryError) -> BoundaryView {
        if self.seen.insert(Self::instance_key(error)) {
            (self.sink)(error);
        }
        BoundaryView {
            heading: "Application error".into(),
            detail: "Something went wrong. Please try again.".into(),
            retry_label: "Try again".into(),
        }
    }
}

/// Pairs a boundary with the framework-supplied zero-argument reset
/// callback. Recovery is entirely the callback caller's business.
pub struct BoundaryHost<B: ErrorBoundary, R: FnMut()> {
    boundary: B,
    reset: R,
}

impl<B: ErrorBoundary, R: FnMut()> BoundaryHost<B, R> {
    pub fn new(boundary: B, reset: R) -> Self {
        Self { boundary, reset }
    }

    pub fn show(&mut self, error: &BoundaryError) -> BoundaryView {
        self.boundary.handle(error)
    }

    /// The retry affordance was pressed: invoke the reset callback once,
    /// with no arguments.
    pub fn press_retry(&mut self) {
        (self.reset)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn dashboard_boundary_shows_generic_retry_affordance() {
        let view = DashboardBoundary.handle(&BoundaryError::new("db timeout"));
        assert_eq!(view.heading, "Something went wrong");
        assert_eq!(view.retry_label, "Try again");
        assert!(!view.detail.contains("db timeout"));
    }

    #[test]
    fn global_boundary_logs_once_per_error_instance() {
        let logged = Rc::new(RefCell::new(Vec::new()));
        let sink_log = logged.clone();
        let mut boundary = GlobalBoundary::new(move |error: &BoundaryError| {
            sink_log.borrow_mut().push(error.message.clone());
        });

        let error = BoundaryError::new("render failed").with_digest("digest-1");
        boundary.handle(&error);
        boundary.handle(&error);
        assert_eq!(logged.borrow().len(), 1);

        let other = BoundaryError::new("render failed").with_digest("digest-2");
        boundary.handle(&other);
        assert_eq!(logged.borrow().len(), 2);
    }

    #[test]
    fn global_boundary_falls_back_to_message_without_digest() {
        let count = Rc::new(RefCell::new(0));
        let sink_count = count.clone();
        let mut boundary = GlobalBoundary::new(move |_: &BoundaryError| {
            *sink_count.borrow_mut() += 1;
        });

        boundary.handle(&BoundaryError::new("render failed"));
        boundary.handle(&BoundaryError::new("render failed"));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn press_retry_invokes_reset_exactly_once_per_press() {
        let presses = Rc::new(RefCell::new(0));
        let reset_count = presses.clone();
        let mut host = BoundaryHost::new(DashboardBoundary, move || {
            *reset_count.borrow_mut() += 1;
        });

        host.show(&BoundaryError::new("boom"));
        assert_eq!(*presses.borrow(), 0);

        host.press_retry();
        assert_eq!(*presses.borrow(), 1);

        host.press_retry();
        assert_eq!(*presses.borrow(), 2);
    }
}

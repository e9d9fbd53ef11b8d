//! Synchronous in-process pub/sub channels for gesture events.

/// A single-threaded signal: handlers run synchronously, in connection
/// order, before `emit` returns.
pub struct Signal<T> {
    handlers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self { handlers: vec![] }
    }

    pub fn connect<F: FnMut(&T) + 'static>(&mut self, handler: F) {
        self.handlers.push(Box::new(handler));
    }

    pub fn emit(&mut self, payload: &T) {
        for h in self.handlers.iter_mut() {
            h(payload);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_reaches_all_handlers_in_connection_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sig: Signal<i32> = Signal::new();

        let a = seen.clone();
        sig.connect(move |v| a.borrow_mut().push(("a", *v)));
        let b = seen.clone();
        sig.connect(move |v| b.borrow_mut().push(("b", *v)));

        sig.emit(&7);
        sig.emit(&8);

        assert_eq!(
            *seen.borrow(),
            vec![("a", 7), ("b", 7), ("a", 8), ("b", 8)]
        );
    }

    #[test]
    fn emit_without_handlers_is_a_noop() {
        let mut sig: Signal<&str> = Signal::new();
        assert!(sig.is_empty());
        sig.emit(&"nothing");
    }

    #[test]
    fn handlers_may_mutate_captured_state() {
        let mut sig: Signal<u32> = Signal::new();
        let count = Rc::new(RefCell::new(0u32));
        let c = count.clone();
        sig.connect(move |v| *c.borrow_mut() += v);
        sig.emit(&3);
        sig.emit(&4);
        assert_eq!(*count.borrow(), 7);
        assert_eq!(sig.len(), 1);
    }
}

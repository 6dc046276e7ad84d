use lightorm::driver::{Operation, Transaction};
use std::sync::{Arc, Mutex};

/// Something a [`LoggingConnection`](crate::LoggingConnection) observed.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Open,
    Close,
    Exec(Operation),

    /// A cursor was cancelled before it was drained
    Cancel,
}

/// Shared handle on the events recorded by a logging connection.
#[derive(Debug, Clone, Default)]
pub struct ExecLog {
    events: Arc<Mutex<Vec<Event>>>,
}

impl ExecLog {
    pub(crate) fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }

    /// All events recorded so far, oldest first.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Count events matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Event) -> bool,
    {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| predicate(event))
            .count()
    }

    pub fn opens(&self) -> usize {
        self.count(|event| matches!(event, Event::Open))
    }

    pub fn closes(&self) -> usize {
        self.count(|event| matches!(event, Event::Close))
    }

    pub fn cancels(&self) -> usize {
        self.count(|event| matches!(event, Event::Cancel))
    }

    /// Number of operations that carried a command
    pub fn commands(&self) -> usize {
        self.count(|event| matches!(event, Event::Exec(op) if !op.is_transaction()))
    }

    pub fn has_transaction(&self, tx: Transaction) -> bool {
        self.count(|event| *event == Event::Exec(Operation::Transaction(tx))) > 0
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

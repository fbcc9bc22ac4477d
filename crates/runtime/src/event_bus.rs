/// One recorded interaction transaction.
///
/// `sequence` is assigned by the bus in emission order, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub sequence: u64,
    pub kind: &'static str,
    pub message: String,
}

/// Append-only log of transactions, in the order they were handled.
#[derive(Debug, Default)]
pub struct EventBus {
    next_sequence: u64,
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event and returns its sequence number.
    pub fn emit(&mut self, kind: &'static str, message: impl Into<String>) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.events.push(Event {
            sequence,
            kind,
            message: message.into(),
        });
        sequence
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn count_kind(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

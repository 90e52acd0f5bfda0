//! Input listener bookkeeping for the active view.

use std::fmt;

/// Kind of input a view subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputChannel {
    /// Pointer position updates and leave events
    PointerMove,
    /// Primary button press/release
    PointerButton,
    /// Container size changes
    Resize,
}

/// Handle returned by [`ListenerRegistry::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Registered input listeners.
///
/// The host registers one entry per channel a view subscribes to on
/// activation and removes them on teardown; input is routed only to
/// channels with a live entry.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(ListenerId, InputChannel)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, channel: InputChannel) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, channel));
        id
    }

    /// Remove a listener. Removing an unknown or already removed id is a no-op.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn is_listening(&self, channel: InputChannel) -> bool {
        self.entries.iter().any(|(_, c)| *c == channel)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_remove() {
        let mut registry = ListenerRegistry::new();
        let a = registry.register(InputChannel::PointerMove);
        let b = registry.register(InputChannel::Resize);
        assert_ne!(a, b);
        assert!(registry.is_listening(InputChannel::Resize));

        assert!(registry.remove(b));
        assert!(!registry.remove(b));
        assert!(!registry.is_listening(InputChannel::Resize));
        assert_eq!(registry.len(), 1);
    }
}

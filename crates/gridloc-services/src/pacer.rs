use std::time::Duration;

/// Cooperative rate limiting for the sequential push/pull loops. Injected
/// so tests run with zero delay while production keeps real pacing.
pub trait Pacer {
    /// Called after each processed item.
    fn after_item(&mut self);
    /// Called after each logical group (a language row during pull).
    fn after_group(&mut self);
}

/// Fixed-interval gate: sleep after every item, plus a longer sleep every
/// `group_size` items and at explicit group boundaries. No adaptive
/// backoff, no server retry hints.
pub struct FixedDelayPacer {
    item_delay: Duration,
    group_delay: Duration,
    group_size: usize,
    items: usize,
}

impl FixedDelayPacer {
    pub fn new(item_delay_ms: u64, group_delay_ms: u64, group_size: usize) -> Self {
        Self {
            item_delay: Duration::from_millis(item_delay_ms),
            group_delay: Duration::from_millis(group_delay_ms),
            group_size: group_size.max(1),
            items: 0,
        }
    }
}

impl Pacer for FixedDelayPacer {
    fn after_item(&mut self) {
        self.items += 1;
        std::thread::sleep(self.item_delay);
        if self.items % self.group_size == 0 {
            std::thread::sleep(self.group_delay);
        }
    }

    fn after_group(&mut self) {
        std::thread::sleep(self.group_delay);
    }
}

/// Zero-delay pacer for tests and dry runs.
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn after_item(&mut self) {}
    fn after_group(&mut self) {}
}

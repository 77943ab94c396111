use std::time::{SystemTime, UNIX_EPOCH};

/// Client-side id allocation for custom attributes.
///
/// Ids are wall-clock milliseconds, bumped so that each id is strictly
/// greater than both the previous allocation and every id already present.
/// Two allocations in the same millisecond therefore never collide.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate using the current wall clock.
    pub fn next(&mut self, existing_max: Option<u64>) -> u64 {
        self.next_at(now_millis(), existing_max)
    }

    /// Allocate as if the clock read `now_millis`.
    pub fn next_at(&mut self, now_millis: u64, existing_max: Option<u64>) -> u64 {
        let floor = existing_max.map_or(0, |max| max.saturating_add(1));
        let id = now_millis
            .max(self.last.saturating_add(1))
            .max(floor);
        self.last = id;
        id
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

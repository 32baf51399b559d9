/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

use std::time::{Duration, Instant};

use tracing::debug;

/// Logs how long the enclosing scope took when dropped.
pub struct ScopeTimer {
    name: &'static str,
    start: Instant,
}

impl ScopeTimer {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        let (amount, unit) = scale(self.elapsed());
        debug!(timer = self.name, "{amount} {unit}");
    }
}

/// Picks the largest unit in which the duration still reads as at least 20.
#[must_use]
pub fn scale(duration: Duration) -> (u128, &'static str) {
    let nanos = duration.as_nanos();
    if nanos >= 20 * 1_000_000_000 {
        (nanos / 1_000_000_000, "s")
    } else if nanos >= 20 * 1_000_000 {
        (nanos / 1_000_000, "ms")
    } else if nanos >= 20 * 1_000 {
        (nanos / 1_000, "us")
    } else {
        (nanos, "ns")
    }
}

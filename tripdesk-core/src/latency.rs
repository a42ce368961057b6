use std::time::Duration;

/// Artificial delay applied before a service call returns.
///
/// Only simulates network latency for demo clients; results never depend
/// on it. `Latency::none()` skips the timer entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency(Duration);

impl Latency {
    pub const fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub async fn simulate(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Per-operation delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub search: Latency,
    pub lookup: Latency,
    pub create: Latency,
    pub list: Latency,
    pub list_all: Latency,
    pub login: Latency,
}

impl LatencyProfile {
    pub const fn none() -> Self {
        Self {
            search: Latency::none(),
            lookup: Latency::none(),
            create: Latency::none(),
            list: Latency::none(),
            list_all: Latency::none(),
            login: Latency::none(),
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            search: Latency::from_millis(800),
            lookup: Latency::none(),
            create: Latency::from_millis(1000),
            list: Latency::from_millis(600),
            list_all: Latency::from_millis(500),
            login: Latency::from_millis(800),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulate_waits_for_configured_delay() {
        let start = tokio::time::Instant::now();
        Latency::from_millis(800).simulate().await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test]
    async fn test_none_returns_immediately() {
        let start = std::time::Instant::now();
        Latency::none().simulate().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}

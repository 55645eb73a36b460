use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::SocketAddr;
use tracing::info;

/// Tracks the number of datagrams received from each source address until
/// the next report, at which point the counts are cleared.
///
/// The receive loop increments counts while the reporter tasks read them
/// out, so the table lives behind a mutex. Reporting swaps the whole table
/// for an empty one; it is never cleared key by key, so a concurrent `add`
/// lands either in the outgoing snapshot or in the fresh table.
///
/// # Examples
///
/// ```
/// use udpecho::SourceCounter;
/// use std::net::SocketAddr;
///
/// let counter = SourceCounter::new();
/// let source: SocketAddr = "127.0.0.1:4000".parse().unwrap();
/// counter.add(source);
/// counter.add(source);
///
/// let counts = counter.take();
/// assert_eq!(counts.get(&source), Some(&2));
/// assert!(counter.take().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SourceCounter {
    counts: Mutex<HashMap<SocketAddr, u64>>,
}

impl SourceCounter {
    /// Creates a counter with no recorded sources
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one datagram from `source`, creating its entry if absent
    pub fn add(&self, source: SocketAddr) {
        let mut counts = self.counts.lock();
        *counts.entry(source).or_insert(0) += 1;
    }

    /// Swaps the current counts out for an empty table and returns the
    /// snapshot
    pub fn take(&self) -> HashMap<SocketAddr, u64> {
        std::mem::take(&mut *self.counts.lock())
    }

    /// Logs one `<source>: <count>` line per source seen since the last
    /// report and resets the counts. An empty counter produces no output.
    pub fn report(&self) {
        for (source, count) in self.take() {
            info!("{source}: {count}");
        }
    }
}

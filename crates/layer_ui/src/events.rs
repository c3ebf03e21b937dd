//! # Event Stream
//!
//! Fan-out of [`UiEvent`]s from the engine to any number of subscribers.
//!
//! ```text
//! RuntimeEngine ──publish──┬──> [bounded queue] ──> subscriber A
//!                          └──> [bounded queue] ──> subscriber B
//! ```
//!
//! Publishing never blocks. When a subscriber falls behind, the OLDEST
//! event in its queue is dropped to make room, so a stalled consumer sees
//! the most recent state once it catches up. Delivery is best effort.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use layer_shared::constants::DEFAULT_EVENT_CAPACITY;
use layer_shared::UiEvent;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Publisher side of one subscriber queue.
struct Subscriber {
    sender: Sender<UiEvent>,
    /// Second receiver used to evict the oldest event on overflow.
    evictor: Receiver<UiEvent>,
    /// Shared with the subscription; a count of 1 means it was dropped.
    alive: Arc<()>,
}

struct Shared {
    subscribers: Mutex<Vec<Subscriber>>,
    capacity: usize,
    published: AtomicU64,
    dropped: AtomicU64,
}

/// Counters since the stream was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventStats {
    /// Events passed to `publish`.
    pub published: u64,
    /// Events evicted from full queues.
    pub dropped: u64,
    /// Live subscribers.
    pub subscribers: usize,
}

/// Cloneable handle to the stream.
#[derive(Clone)]
pub struct EventStream {
    shared: Arc<Shared>,
}

impl EventStream {
    /// Creates a stream with `capacity` events per subscriber (at least 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            shared: Arc::new(Shared {
                subscribers: Mutex::new(Vec::new()),
                capacity: capacity.max(1),
                published: AtomicU64::new(0),
                dropped: AtomicU64::new(0),
            }),
        }
    }

    /// Per-subscriber queue capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }

    /// Opens a new independent queue. Only events published afterwards
    /// are delivered to it.
    #[must_use]
    pub fn subscribe(&self) -> EventSubscription {
        let (sender, receiver) = bounded(self.shared.capacity);
        let alive = Arc::new(());
        self.shared.subscribers.lock().push(Subscriber {
            sender,
            evictor: receiver.clone(),
            alive: Arc::clone(&alive),
        });
        EventSubscription {
            receiver,
            _alive: alive,
        }
    }

    /// Delivers an event to every live subscriber without blocking.
    ///
    /// Returns how many subscribers received it. With no subscribers the
    /// event is discarded.
    pub fn publish(&self, event: &UiEvent) -> usize {
        self.shared.published.fetch_add(1, Ordering::Relaxed);

        let mut subscribers = self.shared.subscribers.lock();
        subscribers.retain(|s| Arc::strong_count(&s.alive) > 1);

        let mut delivered = 0;
        for subscriber in subscribers.iter() {
            let mut pending = event.clone();
            for _attempt in 0..2 {
                match subscriber.sender.try_send(pending) {
                    Ok(()) => {
                        delivered += 1;
                        break;
                    }
                    Err(TrySendError::Full(back)) => {
                        if let Ok(evicted) = subscriber.evictor.try_recv() {
                            self.shared.dropped.fetch_add(1, Ordering::Relaxed);
                            tracing::warn!(
                                "Event queue full, dropped oldest {:?}",
                                evicted.event_type()
                            );
                        }
                        pending = back;
                    }
                    Err(TrySendError::Disconnected(_)) => break,
                }
            }
        }
        delivered
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.shared.subscribers.lock();
        subscribers.retain(|s| Arc::strong_count(&s.alive) > 1);
        subscribers.len()
    }

    /// Snapshot of the counters.
    #[must_use]
    pub fn stats(&self) -> EventStats {
        EventStats {
            published: self.shared.published.load(Ordering::Relaxed),
            dropped: self.shared.dropped.load(Ordering::Relaxed),
            subscribers: self.subscriber_count(),
        }
    }
}

impl Default for EventStream {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl std::fmt::Debug for EventStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStream")
            .field("capacity", &self.shared.capacity)
            .field("stats", &self.stats())
            .finish()
    }
}

/// Receiving end of one subscriber queue. Dropping it unsubscribes.
pub struct EventSubscription {
    receiver: Receiver<UiEvent>,
    _alive: Arc<()>,
}

impl EventSubscription {
    /// Receives one event (non-blocking).
    #[inline]
    pub fn try_recv(&self) -> Option<UiEvent> {
        self.receiver.try_recv().ok()
    }

    /// Waits up to `timeout` for an event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<UiEvent> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Receives all pending events (non-blocking), oldest first.
    pub fn drain(&self) -> Vec<UiEvent> {
        let mut events = Vec::with_capacity(self.receiver.len());
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}

impl std::fmt::Debug for EventSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSubscription")
            .field("pending", &self.pending_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subscribers_discards() {
        let stream = EventStream::new(4);
        assert_eq!(stream.publish(&UiEvent::click("a")), 0);
        let late = stream.subscribe();
        assert_eq!(late.pending_count(), 0);
        assert_eq!(stream.stats().published, 1);
    }

    #[test]
    fn test_fan_out() {
        let stream = EventStream::default();
        let first = stream.subscribe();
        let second = stream.subscribe();
        assert_eq!(stream.publish(&UiEvent::submit("go")), 2);
        assert_eq!(first.try_recv(), Some(UiEvent::submit("go")));
        assert_eq!(second.drain(), vec![UiEvent::submit("go")]);
        assert!(!first.has_events());
    }

    #[test]
    fn test_drop_oldest_when_full() {
        let stream = EventStream::new(2);
        let slow = stream.subscribe();
        for i in 0..5 {
            stream.publish(&UiEvent::change("field", i.to_string()));
        }
        assert_eq!(
            slow.drain(),
            vec![UiEvent::change("field", "3"), UiEvent::change("field", "4")]
        );
        assert_eq!(stream.stats().dropped, 3);
    }

    #[test]
    fn test_dropped_subscription_is_pruned() {
        let stream = EventStream::new(2);
        let kept = stream.subscribe();
        drop(stream.subscribe());
        assert_eq!(stream.publish(&UiEvent::click("x")), 1);
        assert_eq!(stream.subscriber_count(), 1);
        assert_eq!(kept.pending_count(), 1);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let stream = EventStream::new(0);
        assert_eq!(stream.capacity(), 1);
        let sub = stream.subscribe();
        stream.publish(&UiEvent::click("a"));
        stream.publish(&UiEvent::click("b"));
        assert_eq!(sub.drain(), vec![UiEvent::click("b")]);
    }

    #[test]
    fn test_cross_thread_consumer() {
        let stream = EventStream::new(8);
        let sub = stream.subscribe();
        let producer = stream.clone();
        std::thread::spawn(move || {
            producer.publish(&UiEvent::analytics("opened"));
        })
        .join()
        .unwrap();
        assert_eq!(
            sub.recv_timeout(Duration::from_millis(100)),
            Some(UiEvent::analytics("opened"))
        );
        assert_eq!(sub.recv_timeout(Duration::from_millis(1)), None);
    }
}

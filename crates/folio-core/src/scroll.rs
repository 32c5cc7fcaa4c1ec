//! Scroll-position notification primitive

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

/// A platform primitive that reports scroll positions
pub trait ScrollSource {
    /// Register a listener; dropping the listener unregisters it
    fn subscribe(&mut self) -> ScrollListener;

    /// Number of registered listeners still alive
    fn listeners(&self) -> usize;
}

/// Receives every scroll position published after it subscribed
#[derive(Debug)]
pub struct ScrollListener {
    rx: mpsc::UnboundedReceiver<f64>,
}

impl ScrollListener {
    /// Next already-published position, without waiting
    pub fn try_recv(&mut self) -> Option<f64> {
        self.rx.try_recv().ok()
    }
}

impl Stream for ScrollListener {
    type Item = f64;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

/// In-process scroll source: the host publishes, listeners receive
#[derive(Debug, Default)]
pub struct ScrollFeed {
    senders: Vec<mpsc::UnboundedSender<f64>>,
    position: f64,
}

impl ScrollFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published position
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Deliver a position to every live listener, pruning dropped ones
    pub fn publish(&mut self, position: f64) {
        self.position = position;
        self.senders.retain(|tx| tx.send(position).is_ok());
    }
}

impl ScrollSource for ScrollFeed {
    fn subscribe(&mut self) -> ScrollListener {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.push(tx);
        ScrollListener { rx }
    }

    fn listeners(&self) -> usize {
        self.senders.iter().filter(|tx| !tx.is_closed()).count()
    }
}

use crate::Result;
use tokio::sync::broadcast::{self, Receiver, Sender};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Error(String),
    Info(String),
}

#[derive(Debug)]
pub struct NotificationBroadcast {
    tx: Sender<Notification>,
    rx: Receiver<Notification>,
}

impl NotificationBroadcast {
    pub fn new() -> Self {
        let (tx, rx) = broadcast::channel(20);
        Self { tx, rx }
    }

    pub fn send(&self, notification: Notification) -> Result<()> {
        self.tx.send(notification)?;
        Ok(())
    }

    pub fn subscribe(&self) -> Receiver<Notification> {
        self.rx.resubscribe()
    }

    /// Fire and forget. The broadcast keeps its own receiver, so sending
    /// only fails if the channel was torn down, which is logged.
    pub fn send_message(&self, message: Notification) {
        if let Err(error) = self.send(message) {
            warn!("{error}");
        }
    }
}

impl Default for NotificationBroadcast {
    fn default() -> Self {
        Self::new()
    }
}

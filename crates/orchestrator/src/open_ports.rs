//! Append-only collection of open ports shared by probe tasks

use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct OpenPorts {
    ports: Mutex<Vec<u16>>,
}

impl OpenPorts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `port` as open. Writers are serialized by the lock.
    pub async fn add(&self, port: u16) {
        self.ports.lock().await.push(port);
    }

    pub async fn len(&self) -> usize {
        self.ports.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ports.lock().await.is_empty()
    }

    /// Copy of the current contents, in insertion order.
    pub async fn snapshot(&self) -> Vec<u16> {
        self.ports.lock().await.clone()
    }

    pub fn into_inner(self) -> Vec<u16> {
        self.ports.into_inner()
    }
}

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use news_logging::{news_info, news_warn};
use sha2::{Digest, Sha256};

/// Issues and releases the session ids attached to every news request.
pub trait SessionService: Send + Sync {
    fn init_session(&self) -> String;
    fn clear_session(&self, session_id: &str);
}

/// Generates ids locally; the server treats them as opaque correlation tokens.
#[derive(Debug, Default)]
pub struct LocalSessionService {
    counter: AtomicU64,
    active: Mutex<Vec<String>>,
}

impl LocalSessionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, session_id: &str) -> bool {
        self.active
            .lock()
            .map(|active| active.iter().any(|id| id == session_id))
            .unwrap_or(false)
    }

    fn next_id(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut hasher = Sha256::new();
        hasher.update(std::process::id().to_le_bytes());
        hasher.update(nanos.to_le_bytes());
        hasher.update(seq.to_le_bytes());
        let digest = hasher.finalize();

        let mut hex = String::with_capacity(32);
        for byte in digest.iter().take(16) {
            let _ = write!(&mut hex, "{byte:02x}");
        }
        hex
    }
}

impl SessionService for LocalSessionService {
    fn init_session(&self) -> String {
        let id = self.next_id();
        if let Ok(mut active) = self.active.lock() {
            active.push(id.clone());
        }
        news_info!("Session initialised id={}", id);
        id
    }

    fn clear_session(&self, session_id: &str) {
        let removed = match self.active.lock() {
            Ok(mut active) => {
                let before = active.len();
                active.retain(|id| id != session_id);
                before != active.len()
            }
            Err(_) => false,
        };
        if removed {
            news_info!("Session cleared id={}", session_id);
        } else {
            news_warn!("Clearing unknown session id={}", session_id);
        }
    }
}

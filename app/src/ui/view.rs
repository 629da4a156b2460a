use std::sync::{Arc, Mutex};

use common::game::GameSnapshot;
use ringbuffer::{AllocRingBuffer, RingBuffer};

const EVENT_FEED_SIZE: usize = 8;

/// Render-side state shared between the tick loop and the draw loop.
/// The tick loop writes snapshots, the draw loop reads them.
pub struct SharedView {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    events: Arc<Mutex<AllocRingBuffer<String>>>,
}

impl SharedView {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            events: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_FEED_SIZE))),
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn push_event(&self, line: String) {
        self.events.lock().unwrap().enqueue(line);
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().iter().cloned().collect()
    }

    pub fn clear(&self) {
        *self.snapshot.lock().unwrap() = None;
        self.events.lock().unwrap().clear();
    }
}

impl Default for SharedView {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SharedView {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            events: Arc::clone(&self.events),
        }
    }
}

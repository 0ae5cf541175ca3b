// Singleton Pattern - lazy_static Global
// One process-wide instance, built on first access and never again.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Local};
use lazy_static::lazy_static;

use crate::narrate::say;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    static ref INSTANCE: Singleton = Singleton::new();
}

#[derive(Debug)]
pub struct Singleton {
    created_at: DateTime<Local>,
}

impl Singleton {
    // Private: the only way in is `instance()`.
    fn new() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        say("Singleton", "instance created");
        Self {
            created_at: Local::now(),
        }
    }

    /// The global instance. Initialization runs once, on first call,
    /// and is synchronized by `lazy_static`.
    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn show_message(&self) -> &'static str {
        "Hello from Singleton!"
    }
}

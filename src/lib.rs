//! # Classic Design Patterns, One Program Each
//!
//! Every pattern lives in its own module and has a matching binary that
//! narrates what the pattern is doing:
//!
//! ## Structural
//! - Proxy: access check plus lazy construction of the real subject
//! - Decorator: recursive wrapping through `Box<dyn Component>`
//!
//! ## Creational
//! - Singleton: process-wide instance behind `lazy_static`
//! - Simple Factory: tagged enum mapped to constructors
//!
//! ## Behavioral
//! - Strategy: swappable payment methods behind a trait object
//!
//! Run individual samples with:
//! ```bash
//! cargo run --bin proxy_pattern
//! cargo run --bin decorator_pattern
//! cargo run --bin singleton_pattern
//! cargo run --bin strategy_pattern
//! cargo run --bin simple_factory
//! ```

pub mod config;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod narrate;
pub mod proxy;
pub mod singleton;
pub mod strategy;

pub use config::DemoConfig;
pub use error::PatternError;

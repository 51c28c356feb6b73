//! Headless terminal client for the market.
//!
//! # Architecture
//!
//! ```text
//! market (binary, composition root)
//!   ├─→ ClientConfig / FrontendConfig (environment)
//!   ├─→ ContentFactory → Session (state, catalog, navigator, message log)
//!   └─→ Repl + HeadlessDriver (stdin commands, instant scene tweens)
//! ```

pub mod command;
pub mod config;
pub mod driver;
pub mod logging;
pub mod repl;

pub use config::ClientConfig;
pub use driver::HeadlessDriver;
pub use repl::Repl;

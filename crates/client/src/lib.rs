//! Arena client: configuration, logging and presentation around `arena-core`.
//!
//! ```text
//! ClientConfig (environment)
//!   ├─→ Session (scenario + arena config + seed + rounds)
//!   │     └─→ arena_core::run_simulation_with → CombatLog
//!   └─→ presentation (text narration or JSON report)
//! ```

pub mod config;
pub mod logging;
pub mod presentation;
pub mod session;

pub use config::{ClientConfig, LoggingConfig, OutputFormat};
pub use session::{Session, SessionOutcome};

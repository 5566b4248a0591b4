//! High-level orchestration layer over lower-level crates.
//! Intentionally thin: exposes stable functions used by the CLI.

pub use gridloc_core::Result;

mod checkpoint;
mod connect;
mod index;
mod pacer;
mod pull;
mod push;
mod util;

pub use checkpoint::{clear_checkpoint, load_checkpoint, save_checkpoint};
pub use connect::{probe_endpoints, test_connection, EndpointProbe};
pub use index::{resolve_active_branch, RemoteStringIndex};
pub use pacer::{FixedDelayPacer, NoopPacer, Pacer};
pub use pull::{pull_translations, PullOptions};
pub use push::{push_strings, PushOptions};

//! # hypervisor-nics
//!
//! Lists the host's network interfaces and picks the ones that can be
//! handed to the virtual switch for VM external connectivity: NICs that are
//! not bond members, not virtual (bonds and VLANs excepted) and carry no
//! address beyond link-local.

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod interface;
pub mod output;
pub mod snapshot;

pub use classifier::classify;
pub use error::{NicsError, Result};
pub use interface::{is_configured, InterfaceRecord};
pub use output::{NicReport, OutputFormat};
pub use snapshot::{IpCommandProvider, Snapshot, SnapshotProvider, StaticProvider};

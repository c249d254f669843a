//! Interface snapshot acquisition
//!
//! A [`SnapshotProvider`] supplies the interface records and the set of
//! names the OS marks as virtual. The production provider asks iproute2 for
//! a JSON dump of links and addresses and lists the kernel's virtual network
//! device directory.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

use crate::config::SnapshotConfig;
use crate::constants::{error_messages, DEFAULT_IP_COMMAND, IP_ADDRESS_ARGS, VIRTUAL_NET_DIR};
use crate::error::{MapError, Result, SnapshotError};
use crate::interface::{AdminState, InterfaceRecord, OperState};

/// Point-in-time view of the host's interfaces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub interfaces: Vec<InterfaceRecord>,
    pub virtual_names: HashSet<String>,
}

/// Source of interface state
pub trait SnapshotProvider {
    /// All interfaces, in a stable order for the duration of one call.
    fn interfaces(&self) -> Result<Vec<InterfaceRecord>>;

    /// Names of interfaces with no physical device behind them.
    fn virtual_interfaces(&self) -> Result<HashSet<String>>;

    fn snapshot(&self) -> Result<Snapshot> {
        let interfaces = self.interfaces()?;
        let virtual_names = self.virtual_interfaces()?;
        info!(
            "Found {} interfaces ({} virtual)",
            interfaces.len(),
            virtual_names.len()
        );
        Ok(Snapshot { interfaces, virtual_names })
    }
}

/// Provider backed by `ip -details -json address show` and sysfs
#[derive(Debug, Clone)]
pub struct IpCommandProvider {
    ip_command: String,
    virtual_net_dir: PathBuf,
}

impl IpCommandProvider {
    pub fn new(ip_command: impl Into<String>, virtual_net_dir: impl Into<PathBuf>) -> Self {
        Self {
            ip_command: ip_command.into(),
            virtual_net_dir: virtual_net_dir.into(),
        }
    }

    pub fn from_config(config: &SnapshotConfig) -> Self {
        Self::new(config.ip_command.clone(), config.virtual_net_dir.clone())
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.ip_command, IP_ADDRESS_ARGS.join(" "))
    }
}

impl Default for IpCommandProvider {
    fn default() -> Self {
        Self::new(DEFAULT_IP_COMMAND, VIRTUAL_NET_DIR)
    }
}

impl SnapshotProvider for IpCommandProvider {
    fn interfaces(&self) -> Result<Vec<InterfaceRecord>> {
        debug!("Running {}", self.command_line());

        let output = Command::new(&self.ip_command)
            .args(IP_ADDRESS_ARGS)
            .output()
            .map_err(|e| SnapshotError::CommandFailed {
                command: self.command_line(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SnapshotError::CommandFailed {
                command: self.command_line(),
                reason: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            }
            .into());
        }

        let stdout = String::from_utf8(output.stdout).map_parse_error("ip output is not UTF-8")?;
        parse_ip_address_json(&stdout)
    }

    fn virtual_interfaces(&self) -> Result<HashSet<String>> {
        read_virtual_interfaces(&self.virtual_net_dir)
    }
}

/// Provider returning a fixed snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    snapshot: Snapshot,
}

impl StaticProvider {
    pub fn new(interfaces: Vec<InterfaceRecord>, virtual_names: HashSet<String>) -> Self {
        Self {
            snapshot: Snapshot { interfaces, virtual_names },
        }
    }
}

impl SnapshotProvider for StaticProvider {
    fn interfaces(&self) -> Result<Vec<InterfaceRecord>> {
        Ok(self.snapshot.interfaces.clone())
    }

    fn virtual_interfaces(&self) -> Result<HashSet<String>> {
        Ok(self.snapshot.virtual_names.clone())
    }
}

#[derive(Debug, Deserialize)]
struct IpLinkEntry {
    ifname: Option<String>,
    #[serde(default)]
    flags: Vec<String>,
    operstate: Option<String>,
    linkinfo: Option<LinkInfo>,
    #[serde(default)]
    addr_info: Vec<AddrInfo>,
}

#[derive(Debug, Deserialize)]
struct LinkInfo {
    info_kind: Option<String>,
    info_slave_kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AddrInfo {
    local: Option<String>,
}

impl IpLinkEntry {
    fn into_record(self) -> Option<InterfaceRecord> {
        let name = self.ifname.filter(|name| !name.is_empty())?;

        let admin_state = if self.flags.iter().any(|flag| flag == "UP") {
            AdminState::Up
        } else {
            AdminState::Down
        };
        let operational_state = self
            .operstate
            .as_deref()
            .map(OperState::from)
            .unwrap_or(OperState::Unknown);
        let (kind, slave_kind) = match self.linkinfo {
            Some(info) => (info.info_kind, info.info_slave_kind),
            None => (None, None),
        };
        let addresses = self.addr_info.into_iter().filter_map(|addr| addr.local).collect();

        Some(InterfaceRecord {
            name,
            operational_state,
            admin_state,
            slave_kind,
            kind,
            addresses,
        })
    }
}

/// Parse the output of `ip -details -json address show`.
///
/// Entries without an interface name are skipped with a warning rather than
/// failing the whole listing.
pub fn parse_ip_address_json(json: &str) -> Result<Vec<InterfaceRecord>> {
    let value: serde_json::Value = serde_json::from_str(json).map_parse_error("invalid JSON")?;
    if !value.is_array() {
        return Err(SnapshotError::ParseFailed(error_messages::NOT_AN_ARRAY.to_string()).into());
    }

    let entries: Vec<IpLinkEntry> =
        serde_json::from_value(value).map_parse_error("unexpected interface layout")?;

    let mut records = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        match entry.into_record() {
            Some(record) => records.push(record),
            None => warn!("Skipping interface entry {} without a name", position),
        }
    }

    Ok(records)
}

/// Names of the entries in the kernel's virtual network device directory.
///
/// A missing directory means no interface is known to be virtual.
pub fn read_virtual_interfaces(dir: &Path) -> Result<HashSet<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} does not exist, treating no interface as virtual", dir.display());
            return Ok(HashSet::new());
        }
        Err(e) => {
            return Err(SnapshotError::VirtualListFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            }
            .into())
        }
    };

    let mut names = HashSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| SnapshotError::VirtualListFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }

    debug!("Virtual interfaces: {:?}", names);
    Ok(names)
}

//! Interface records and the state predicates evaluated over them.
//!
//! Records are plain data captured once per invocation; nothing here talks
//! to the OS.

use serde::Serialize;

use crate::constants::LINK_LOCAL_PREFIX;

/// Physical link state as reported by the kernel (`operstate`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperState {
    Up,
    Down,
    Unknown,
    LowerLayerDown,
    Dormant,
    NotPresent,
    Testing,
    Other(String),
}

impl From<&str> for OperState {
    fn from(state: &str) -> Self {
        match state.to_lowercase().as_str() {
            "up" => OperState::Up,
            "down" => OperState::Down,
            "unknown" => OperState::Unknown,
            "lowerlayerdown" => OperState::LowerLayerDown,
            "dormant" => OperState::Dormant,
            "notpresent" => OperState::NotPresent,
            "testing" => OperState::Testing,
            _ => OperState::Other(state.to_string()),
        }
    }
}

/// Whether the interface has been administratively enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminState {
    Up,
    Down,
}

/// One network interface as seen at snapshot time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub name: String,
    pub operational_state: OperState,
    pub admin_state: AdminState,
    /// Kind of the master this interface is enslaved to, e.g. "bond"
    pub slave_kind: Option<String>,
    /// Link kind, absent for plain hardware NICs
    pub kind: Option<String>,
    pub addresses: Vec<String>,
}

impl InterfaceRecord {
    /// A down, unconfigured interface with no kind information.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operational_state: OperState::Down,
            admin_state: AdminState::Down,
            slave_kind: None,
            kind: None,
            addresses: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn with_slave_kind(mut self, slave_kind: &str) -> Self {
        self.slave_kind = Some(slave_kind.to_string());
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.addresses.push(address.to_string());
        self
    }

    pub fn with_states(mut self, admin: AdminState, oper: OperState) -> Self {
        self.admin_state = admin;
        self.operational_state = oper;
        self
    }
}

/// Per-interface status row as rendered to the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicStatus {
    pub name: String,
    pub configured: bool,
    pub up: bool,
    pub connected: bool,
}

impl From<&InterfaceRecord> for NicStatus {
    fn from(record: &InterfaceRecord) -> Self {
        Self {
            name: record.name.clone(),
            configured: is_configured(&record.addresses),
            up: is_up(record),
            connected: is_connected(record),
        }
    }
}

/// Textual prefix test, not a semantic fe80::/10 check
pub fn is_link_local(address: &str) -> bool {
    address.starts_with(LINK_LOCAL_PREFIX)
}

/// True when at least one assigned address is not link-local.
pub fn is_configured<S: AsRef<str>>(addresses: &[S]) -> bool {
    addresses.iter().any(|address| {
        let address: &str = address.as_ref();
        !address.is_empty() && !is_link_local(address)
    })
}

pub fn is_up(record: &InterfaceRecord) -> bool {
    record.admin_state == AdminState::Up
}

pub fn is_connected(record: &InterfaceRecord) -> bool {
    record.operational_state == OperState::Up
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oper_state_case_insensitive() {
        assert_eq!(OperState::from("UP"), OperState::Up);
        assert_eq!(OperState::from("up"), OperState::Up);
        assert_eq!(OperState::from("LOWERLAYERDOWN"), OperState::LowerLayerDown);
        assert_eq!(OperState::from("weird"), OperState::Other("weird".to_string()));
    }

    #[test]
    fn test_status_from_record() {
        let record = InterfaceRecord::new("eth0")
            .with_states(AdminState::Up, OperState::Down)
            .with_address("fe80::1");
        let status = NicStatus::from(&record);

        assert_eq!(status.name, "eth0");
        assert!(!status.configured);
        assert!(status.up);
        assert!(!status.connected);
    }
}

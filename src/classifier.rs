//! Candidate NIC classification
//!
//! Decides which interfaces can be handed to the virtual switch for
//! external connectivity. A candidate is:
//!   - not enslaved to a bond
//!   - not virtual, unless it is itself a bond or a VLAN
//!   - not already carrying a non-link-local address
//!
//! The checks run in that order for every interface.

use std::collections::HashSet;
use tracing::debug;

use crate::constants::kinds;
use crate::interface::{is_configured, is_link_local, InterfaceRecord, NicStatus};
use crate::snapshot::Snapshot;

/// Why an interface was kept out of the candidate list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    BondSlave,
    Virtual { kind: Option<String> },
    Configured,
}

/// Classify a single interface. `None` means it is a candidate.
pub fn exclusion_reason(nic: &InterfaceRecord, virtual_names: &HashSet<String>) -> Option<Exclusion> {
    if nic.slave_kind.as_deref() == Some(kinds::BOND) {
        return Some(Exclusion::BondSlave);
    }

    if virtual_names.contains(&nic.name) {
        let allowed = nic
            .kind
            .as_deref()
            .is_some_and(|kind| kinds::ALLOWED_VIRTUAL.contains(&kind));
        if !allowed {
            return Some(Exclusion::Virtual { kind: nic.kind.clone() });
        }
    }

    if is_configured(&nic.addresses) {
        return Some(Exclusion::Configured);
    }

    None
}

/// Names of the candidate interfaces, in input order.
pub fn classify(interfaces: &[InterfaceRecord], virtual_names: &HashSet<String>) -> Vec<String> {
    let mut candidates = Vec::new();

    for nic in interfaces {
        debug!("Checking interface {:?}", nic.name);

        match exclusion_reason(nic, virtual_names) {
            Some(Exclusion::BondSlave) => {
                debug!("Ignoring interface {:?}, it is part of a bond", nic.name);
            }
            Some(Exclusion::Virtual { kind }) => {
                debug!(
                    "Ignoring interface {:?}, it is a virtual interface, kind: {}",
                    nic.name,
                    kind.as_deref().unwrap_or("none")
                );
            }
            Some(Exclusion::Configured) => {
                let address = nic
                    .addresses
                    .iter()
                    .find(|a| !a.is_empty() && !is_link_local(a));
                debug!("Interface {:?} is configured with {:?}", nic.name, address);
            }
            None => {
                // Names are unique per host, but a hand-built snapshot may repeat one
                if candidates.contains(&nic.name) {
                    continue;
                }
                debug!("Adding interface {:?} as a candidate", nic.name);
                candidates.push(nic.name.clone());
            }
        }
    }

    candidates
}

/// Status rows for every interface in the snapshot, in input order.
pub fn to_output_schema(interfaces: &[InterfaceRecord]) -> Vec<NicStatus> {
    interfaces.iter().map(NicStatus::from).collect()
}

/// Candidate names for a full snapshot.
pub fn filter_candidate_nics(snapshot: &Snapshot) -> Vec<String> {
    classify(&snapshot.interfaces, &snapshot.virtual_names)
}

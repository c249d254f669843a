//! Interface predicate tests

use hypervisor_nics::interface::*;

#[test]
fn test_is_configured_examples() {
    let empty: [&str; 0] = [];
    assert!(!is_configured(&empty));
    assert!(!is_configured(&["fe80::1"]));
    assert!(is_configured(&["fe80::1", "10.0.0.5"]));
    assert!(is_configured(&["10.0.0.5"]));
}

#[test]
fn test_is_configured_ignores_order() {
    assert!(is_configured(&["10.0.0.5", "fe80::1"]));
    assert!(is_configured(&["fe80::1", "fe80::2", "2001:db8::1"]));
}

#[test]
fn test_is_configured_accepts_owned_strings() {
    let addresses = vec!["fe80::abcd".to_string()];
    assert!(!is_configured(&addresses));
}

#[test]
fn test_link_local_is_a_case_sensitive_prefix_match() {
    assert!(is_link_local("fe80::1"));
    assert!(is_link_local("fe80:0:0:0::1"));
    assert!(!is_link_local("FE80::1"));
    assert!(!is_link_local("fe90::1"));
    assert!(!is_link_local("192.168.0.1"));

    // Uppercase link-local counts as a real address
    assert!(is_configured(&["FE80::1"]));
}

#[test]
fn test_empty_address_string_is_ignored() {
    assert!(!is_configured(&[""]));
    assert!(!is_configured(&["", "fe80::1"]));
}

#[test]
fn test_up_and_connected_are_independent() {
    let admin_only = InterfaceRecord::new("eth0").with_states(AdminState::Up, OperState::Down);
    assert!(is_up(&admin_only));
    assert!(!is_connected(&admin_only));

    let unknown = InterfaceRecord::new("lo").with_states(AdminState::Up, OperState::Unknown);
    assert!(is_up(&unknown));
    assert!(!is_connected(&unknown));

    let both = InterfaceRecord::new("eth1").with_states(AdminState::Up, OperState::from("UP"));
    assert!(is_up(&both) && is_connected(&both));
}

#[test]
fn test_new_record_defaults() {
    let record = InterfaceRecord::new("eth5");
    assert_eq!(record.name, "eth5");
    assert_eq!(record.admin_state, AdminState::Down);
    assert_eq!(record.operational_state, OperState::Down);
    assert!(record.kind.is_none());
    assert!(record.slave_kind.is_none());
    assert!(record.addresses.is_empty());
}

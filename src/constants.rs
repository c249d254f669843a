//! Application constants
//!
//! Interface kinds, sysfs locations, format names and other fixed values
//! used across the crate.

// Configuration file constants
pub const DEFAULT_CONFIG_FILE: &str = "hypervisor_nics.yaml";

// OS query facilities
pub const DEFAULT_IP_COMMAND: &str = "ip";
pub const IP_ADDRESS_ARGS: &[&str] = &["-details", "-json", "address", "show"];
pub const VIRTUAL_NET_DIR: &str = "/sys/devices/virtual/net";

// Textual prefix of IPv6 link-local addresses (fe80::/10)
pub const LINK_LOCAL_PREFIX: &str = "fe80";

// Interface kind names as reported by the kernel
pub mod kinds {
    pub const BOND: &str = "bond";
    pub const VLAN: &str = "vlan";

    /// Virtual kinds that still provide external connectivity
    pub const ALLOWED_VIRTUAL: &[&str] = &[BOND, VLAN];
}

// Output format names accepted on the command line
pub mod formats {
    pub const VALUE: &str = "value";
    pub const JSON: &str = "json";
    pub const JSON_INDENT: &str = "json-indent";

    pub const ALL_FORMATS: &[&str] = &[VALUE, JSON, JSON_INDENT];
}

// Default configuration values
pub mod defaults {
    pub const OUTPUT_FORMAT: &str = super::formats::JSON;
    pub const LOG_LEVEL: &str = "info";
    pub const VERBOSE_LOG_LEVEL: &str = "debug";
}

// Error message constants
pub mod error_messages {
    pub const INVALID_FORMAT: &str = "must be 'value', 'json', or 'json-indent'";
    pub const INVALID_LOG_LEVEL: &str = "must be one of trace, debug, info, warn, error";
    pub const NOT_AN_ARRAY: &str = "expected a JSON array of interfaces";
}

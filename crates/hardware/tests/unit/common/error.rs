//! Error Type Unit Tests.
//!
//! Verifies error messages and the conversion of configuration errors into
//! simulation errors.

use axil2ahb_core::common::{AxiAddr, ConfigError, SimError, TransferSize};

#[test]
fn timeout_message_names_operation_and_address() {
    let e = SimError::Timeout {
        op: "read",
        addr: AxiAddr::new(0x10),
        cycles: 500,
    };
    assert_eq!(e.to_string(), "read at 0x10 did not complete within 500 cycles");
}

#[test]
fn data_mismatch_message() {
    let e = SimError::DataMismatch {
        addr: AxiAddr::new(0x8),
        expected: 2,
        actual: 0,
    };
    assert_eq!(e.to_string(), "invalid data at 0x8: 0x0 != 0x2");
}

#[test]
fn slave_error_message() {
    let e = SimError::SlaveError {
        addr: AxiAddr::new(0x400),
    };
    assert_eq!(e.to_string(), "slave error response for 0x400");
}

#[test]
fn busy_is_not_a_timeout() {
    let e = SimError::Busy {
        op: "read",
        addr: AxiAddr::new(0x44),
    };
    assert_eq!(e.to_string(), "read at 0x44 issued while another operation is outstanding");
    assert!(!matches!(e, SimError::Timeout { .. }));
}

#[test]
fn no_region_message() {
    let e = SimError::NoRegion {
        size: TransferSize::Word,
    };
    assert_eq!(e.to_string(), "no word region at the configured size_sel_addr_bits");
}

#[test]
fn config_error_converts_transparently() {
    let e: SimError = ConfigError::EmptyMemory.into();
    assert_eq!(e, SimError::Config(ConfigError::EmptyMemory));
    assert_eq!(e.to_string(), "SRAM size must be non-zero");
}

#[test]
fn address_width_messages() {
    assert_eq!(
        ConfigError::AhbAddrWidth(33).to_string(),
        "ahb_addr_width must be in 1..=32, got 33"
    );
    assert_eq!(
        ConfigError::AxiAddrWidth {
            size_sel_addr_bits: 40,
            ahb_addr_width: 32
        }
        .to_string(),
        "size_sel_addr_bits (40) + ahb_addr_width (32) exceeds 64 bits"
    );
}

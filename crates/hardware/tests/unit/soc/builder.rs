//! System Builder Tests.
//!
//! Verifies that systems are assembled from configuration, that invalid
//! configurations are rejected, and that bridge and slave are clocked together.

use axil2ahb_core::bridge::BridgeState;
use axil2ahb_core::bus::{AhbSlaveSignals, HTrans};
use axil2ahb_core::common::ConfigError;
use axil2ahb_core::config::{BridgeConfig, Config};
use axil2ahb_core::soc::System;

use crate::common::harness::{idle_master, write_master};
use crate::common::mocks::slave::MockSlave;

#[test]
fn default_system_uses_sram() {
    let system = System::new(&Config::default()).unwrap();
    assert_eq!(system.slave.name(), "SRAM");
    assert_eq!(system.bridge.state(), BridgeState::Idle);
    assert_eq!(system.bridge.config().size_sel_addr_bits, 0);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = Config::default();
    config.bridge.ahb_addr_width = 0;
    assert_eq!(System::new(&config).unwrap_err(), ConfigError::AhbAddrWidth(0));

    let mut config = Config::default();
    config.memory.size_bytes = 0;
    assert_eq!(System::new(&config).unwrap_err(), ConfigError::EmptyMemory);
}

#[test]
fn slave_sees_the_address_phase_once() {
    let mut slave = MockSlave::new();
    let _ = slave.expect_outputs().return_const(AhbSlaveSignals::default());
    let _ = slave
        .expect_tick()
        .withf(|m| m.htrans == HTrans::NonSeq)
        .times(1)
        .return_const(());
    let _ = slave
        .expect_tick()
        .withf(|m| m.htrans == HTrans::Idle)
        .return_const(());

    let mut system = System::with_slave(BridgeConfig::default(), Box::new(slave)).unwrap();
    system.tick(&write_master(0, 1, 0xF));
    for _ in 0..5 {
        system.tick(&idle_master());
    }
    assert_eq!(system.bridge.state(), BridgeState::Idle);
    assert_eq!(system.bridge.stats.writes, 1);
}

#[test]
fn reset_reaches_the_slave() {
    let mut slave = MockSlave::new();
    let _ = slave.expect_reset().times(1).return_const(());
    let _ = slave.expect_outputs().return_const(AhbSlaveSignals::default());
    let _ = slave.expect_tick().return_const(());

    let mut system = System::with_slave(BridgeConfig::default(), Box::new(slave)).unwrap();
    system.assert_reset();
    assert!(system.bridge.in_reset());
    system.release_reset();
    system.tick(&idle_master());
    assert!(!system.bridge.in_reset());
}

use axil2ahb_core::bus::{AhbMasterSignals, AhbSlaveSignals, HResp};
use axil2ahb_core::soc::AhbSlave;
use mockall::mock;

mock! {
    /// AHB-Lite slave whose outputs and edges are scripted per test.
    pub Slave {}
    impl AhbSlave for Slave {
        fn name(&self) -> &'static str;
        fn outputs(&self) -> AhbSlaveSignals;
        fn tick(&mut self, master: &AhbMasterSignals);
        fn reset(&mut self);
    }
}

/// A mock slave that drives `signals` every cycle and accepts any number of edges.
pub fn constant_slave(signals: AhbSlaveSignals) -> MockSlave {
    let mut slave = MockSlave::new();
    let _ = slave.expect_name().return_const("MOCK");
    let _ = slave.expect_outputs().return_const(signals);
    let _ = slave.expect_tick().return_const(());
    let _ = slave.expect_reset().return_const(());
    slave
}

/// Signals of a slave that answers every data phase with `ERROR` in a single cycle.
pub const fn error_signals() -> AhbSlaveSignals {
    AhbSlaveSignals {
        hready: true,
        hresp: HResp::Error,
        hrdata: 0,
    }
}

/// Signals of a slave that never completes a phase.
pub const fn stuck_signals() -> AhbSlaveSignals {
    AhbSlaveSignals {
        hready: false,
        hresp: HResp::Okay,
        hrdata: 0,
    }
}

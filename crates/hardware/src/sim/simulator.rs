//! Simulator: owns the AXI master and the system side-by-side.
//!
//! Each cycle is evaluated in two phases. First every component's outputs are computed (the
//! master and the AHB slave from registered state only, the bridge's AXI readies from its
//! state and the master's valids), then all components advance at the shared rising edge.
//! On top of the clock sit blocking accessors that issue one AXI4-Lite operation and run the
//! clock until its response is accepted.

use tracing::{debug, trace};

use crate::bus::AxiResp;
use crate::common::{AxiAddr, SimError, TransferSize};
use crate::config::Config;
use crate::sim::master::{AxiLiteMaster, Completion, MasterOp, extract_lanes};
use crate::soc::System;
use crate::stats::BridgeStats;

/// Top-level simulator: AXI4-Lite master + bridge + AHB-Lite slave.
#[derive(Debug)]
pub struct Simulator {
    /// The bridge and its AHB slave.
    pub system: System,
    /// Stimulus on the bridge's AXI port.
    pub master: AxiLiteMaster,
    cycle: u64,
    watchdog: u64,
    reset_cycles: u32,
    trace: bool,
}

impl Simulator {
    /// Builds the system described by `config` and attaches a master to it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        let system = System::new(config)?;
        Ok(Self::with_system(system, config))
    }

    /// Attaches a master, configured from `config.stimulus`, to an existing system.
    pub fn with_system(system: System, config: &Config) -> Self {
        let mut master = AxiLiteMaster::new();
        master.set_idle_generator(config.stimulus.idle_pattern.as_deref());
        master.set_backpressure_generator(config.stimulus.backpressure_pattern.as_deref());
        Self {
            system,
            master,
            cycle: 0,
            watchdog: config.general.watchdog_cycles,
            reset_cycles: config.stimulus.reset_cycles,
            trace: config.general.trace,
        }
    }

    /// Returns the number of clock edges simulated so far.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Returns the bridge's activity counters.
    pub const fn stats(&self) -> &BridgeStats {
        &self.system.bridge.stats
    }

    /// Advances the whole system by one clock cycle.
    pub fn tick(&mut self) {
        let m = self.master.outputs();
        let s = self.system.axi_outputs(&m);

        if self.trace {
            let ahb = self.system.bridge.ahb_outputs();
            let hs = self.system.slave.outputs();
            trace!(
                cycle = self.cycle,
                state = %self.system.bridge.state(),
                awvalid = m.awvalid,
                awready = s.awready,
                wvalid = m.wvalid,
                wready = s.wready,
                bvalid = s.bvalid,
                bready = m.bready,
                arvalid = m.arvalid,
                arready = s.arready,
                rvalid = s.rvalid,
                rready = m.rready,
                haddr = %ahb.haddr,
                htrans = ?ahb.htrans,
                hwrite = ahb.hwrite,
                hready = hs.hready,
                hresp = ?hs.hresp,
                "cycle"
            );
        }

        self.master.tick(&s);
        self.system.tick(&m);
        self.cycle += 1;
    }

    /// Runs `n` clock cycles.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Asserts reset; the bridge and slave go idle immediately and the master drops its
    /// outstanding operation.
    pub fn assert_reset(&mut self) {
        self.system.assert_reset();
        self.master.reset();
    }

    /// Releases reset; it takes effect at the next clock edge.
    pub fn release_reset(&mut self) {
        self.system.release_reset();
    }

    /// Performs the standard reset sequence: hold reset for `reset_cycles` cycles, release it,
    /// then idle for another `reset_cycles` cycles.
    pub fn reset(&mut self) {
        debug!(cycles = self.reset_cycles, "reset sequence");
        self.assert_reset();
        self.run(u64::from(self.reset_cycles));
        self.release_reset();
        self.run(u64::from(self.reset_cycles));
    }

    /// Issues one operation and runs the clock until its response is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InReset`] if the bridge is held in reset, [`SimError::Busy`] if the
    /// master already has an operation outstanding, and [`SimError::Timeout`] if no response
    /// arrives within the watchdog limit.
    pub fn execute(&mut self, op: MasterOp) -> Result<Completion, SimError> {
        if self.system.bridge.in_reset() {
            return Err(SimError::InReset);
        }
        if !self.master.issue(op) {
            return Err(SimError::Busy {
                op: op_name(&op),
                addr: op.addr(),
            });
        }
        for _ in 0..self.watchdog {
            self.tick();
            if let Some(done) = self.master.take_completion() {
                trace!(addr = %op.addr(), resp = ?done.resp, data = done.data, "operation complete");
                return Ok(done);
            }
        }
        self.master.reset();
        Err(SimError::Timeout {
            op: op_name(&op),
            addr: op.addr(),
            cycles: self.watchdog,
        })
    }

    /// Writes `value` as a `size` access at `addr`.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, reset, or a non-`OKAY` response.
    pub fn write(&mut self, addr: AxiAddr, size: TransferSize, value: u32) -> Result<(), SimError> {
        let done = self.execute(MasterOp::write(addr, size, value))?;
        check_resp(done.resp, addr)
    }

    /// Reads a `size` access at `addr`, returning the lanes it covers.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, reset, or a non-`OKAY` response.
    pub fn read(&mut self, addr: AxiAddr, size: TransferSize) -> Result<u32, SimError> {
        let done = self.execute(MasterOp::Read { addr })?;
        check_resp(done.resp, addr)?;
        Ok(extract_lanes(done.data, addr, size))
    }

    /// Writes one byte at `addr`.
    ///
    /// # Errors
    ///
    /// See [`Simulator::write`].
    pub fn write_byte(&mut self, addr: u64, value: u8) -> Result<(), SimError> {
        self.write(AxiAddr::new(addr), TransferSize::Byte, u32::from(value))
    }

    /// Writes one halfword at `addr`.
    ///
    /// # Errors
    ///
    /// See [`Simulator::write`].
    pub fn write_halfword(&mut self, addr: u64, value: u16) -> Result<(), SimError> {
        self.write(AxiAddr::new(addr), TransferSize::Halfword, u32::from(value))
    }

    /// Writes one 32-bit word at `addr`.
    ///
    /// # Errors
    ///
    /// See [`Simulator::write`].
    pub fn write_dword(&mut self, addr: u64, value: u32) -> Result<(), SimError> {
        self.write(AxiAddr::new(addr), TransferSize::Word, value)
    }

    /// Reads one byte at `addr`.
    ///
    /// # Errors
    ///
    /// See [`Simulator::read`].
    pub fn read_byte(&mut self, addr: u64) -> Result<u8, SimError> {
        let v = self.read(AxiAddr::new(addr), TransferSize::Byte)?;
        Ok(v as u8)
    }

    /// Reads one halfword at `addr`.
    ///
    /// # Errors
    ///
    /// See [`Simulator::read`].
    pub fn read_halfword(&mut self, addr: u64) -> Result<u16, SimError> {
        let v = self.read(AxiAddr::new(addr), TransferSize::Halfword)?;
        Ok(v as u16)
    }

    /// Reads one 32-bit word at `addr`.
    ///
    /// # Errors
    ///
    /// See [`Simulator::read`].
    pub fn read_dword(&mut self, addr: u64) -> Result<u32, SimError> {
        self.read(AxiAddr::new(addr), TransferSize::Word)
    }
}

const fn op_name(op: &MasterOp) -> &'static str {
    match op {
        MasterOp::Write { .. } => "write",
        MasterOp::Read { .. } => "read",
    }
}

const fn check_resp(resp: AxiResp, addr: AxiAddr) -> Result<(), SimError> {
    match resp {
        AxiResp::Okay | AxiResp::ExOkay => Ok(()),
        AxiResp::SlvErr => Err(SimError::SlaveError { addr }),
        AxiResp::DecErr => Err(SimError::DecodeError { addr }),
    }
}

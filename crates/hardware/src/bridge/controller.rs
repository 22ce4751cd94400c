//! Bridge Controller.
//!
//! The state machine that serializes AXI4-Lite requests onto AHB-Lite:
//!
//! ```text
//!   IDLE ──request──▶ ADDR_PHASE ──HREADY──▶ DATA_PHASE ──HREADY──▶ RESPOND ──B/R handshake──▶ IDLE
//! ```
//!
//! 1. **IDLE:** Accepts the next request from the responder and consults the size selector.
//! 2. **ADDR_PHASE:** The initiator drives address and control until the slave accepts them.
//! 3. **DATA_PHASE:** The initiator drives or collects data until the slave completes the phase.
//! 4. **RESPOND:** The responder drives `B` or `R` with the mapped status until accepted.
//!
//! Exactly one transaction is in flight between acceptance and response. Reset is asserted
//! asynchronously and released on the next clock edge; an interrupted transaction is dropped
//! without any response.

use tracing::{debug, trace, warn};

use super::initiator::{AhbLiteInitiator, AhbTransfer, InitiatorEvent};
use super::responder::{AxiLiteResponder, AxiRequest, AxiResponse};
use super::selector::SizeSelector;
use crate::bus::{
    AhbMasterSignals, AhbSlaveSignals, AxiLiteMasterSignals, AxiLiteSlaveSignals, AxiResp,
    hprot_from_axprot,
};
use crate::common::{ConfigError, Direction};
use crate::config::BridgeConfig;
use crate::stats::BridgeStats;

/// Controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BridgeState {
    /// Waiting for a complete request.
    #[default]
    Idle,
    /// AHB address phase in progress.
    AddrPhase,
    /// AHB data phase in progress.
    DataPhase,
    /// AXI response driven, waiting for the master to accept it.
    Respond,
}

impl std::fmt::Display for BridgeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::AddrPhase => write!(f, "ADDR_PHASE"),
            Self::DataPhase => write!(f, "DATA_PHASE"),
            Self::Respond => write!(f, "RESPOND"),
        }
    }
}

/// Both ports of the bridge as driven in one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BridgeOutputs {
    /// AXI4-Lite slave-side signals.
    pub axi: AxiLiteSlaveSignals,
    /// AHB-Lite master-side signals.
    pub ahb: AhbMasterSignals,
}

/// The AXI4-Lite to AHB-Lite bridge.
#[derive(Debug)]
pub struct BridgeController {
    config: BridgeConfig,
    state: BridgeState,
    selector: SizeSelector,
    responder: AxiLiteResponder,
    initiator: AhbLiteInitiator,
    /// Request owned by the controller from acceptance until its response is accepted.
    current: Option<AxiRequest>,
    in_reset: bool,
    release_pending: bool,
    /// Activity counters.
    pub stats: BridgeStats,
}

impl BridgeController {
    /// Creates a bridge in the `IDLE` state, out of reset.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not describe a buildable bridge.
    pub fn new(config: BridgeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: BridgeState::Idle,
            selector: SizeSelector::new(&config),
            responder: AxiLiteResponder::new(),
            initiator: AhbLiteInitiator::new(),
            current: None,
            in_reset: false,
            release_pending: false,
            stats: BridgeStats::default(),
        })
    }

    /// Returns the instantiation parameters.
    pub const fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Returns the current controller state.
    pub const fn state(&self) -> BridgeState {
        self.state
    }

    /// Returns the size selector used for incoming requests.
    pub const fn selector(&self) -> &SizeSelector {
        &self.selector
    }

    /// Returns the request currently in flight.
    pub const fn current_request(&self) -> Option<&AxiRequest> {
        self.current.as_ref()
    }

    /// Returns the AHB transfer currently owned by the initiator.
    pub const fn current_transfer(&self) -> Option<&AhbTransfer> {
        self.initiator.transfer()
    }

    /// Returns `true` while reset is asserted or not yet released.
    pub const fn in_reset(&self) -> bool {
        self.in_reset
    }

    /// Returns `true` when no transaction is in flight and the bridge can accept one.
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, BridgeState::Idle) && !self.in_reset
    }

    /// Asserts reset.
    ///
    /// Takes effect immediately: the controller returns to `IDLE`, the in-flight request and
    /// AHB transfer are discarded, and every output goes inactive.
    pub fn assert_reset(&mut self) {
        if self.current.is_some() || self.responder.has_partial_write() {
            debug!(state = %self.state, "reset aborts in-flight transaction");
            if self.current.is_some() {
                self.stats.aborted_by_reset += 1;
            }
        }
        self.state = BridgeState::Idle;
        self.current = None;
        self.responder.reset();
        self.initiator.reset();
        self.in_reset = true;
        self.release_pending = false;
    }

    /// Deasserts reset; the bridge leaves reset at the next clock edge.
    pub fn release_reset(&mut self) {
        if self.in_reset {
            self.release_pending = true;
        }
    }

    /// Computes the AXI slave-side signals for this cycle.
    pub fn axi_outputs(&self, master: &AxiLiteMasterSignals) -> AxiLiteSlaveSignals {
        if self.in_reset {
            return AxiLiteSlaveSignals::default();
        }
        let accepting = matches!(self.state, BridgeState::Idle);
        self.responder.outputs(accepting, master)
    }

    /// Computes the AHB master-side signals for this cycle.
    pub fn ahb_outputs(&self) -> AhbMasterSignals {
        if self.in_reset {
            return AhbMasterSignals::default();
        }
        self.initiator.outputs()
    }

    /// Computes both ports for this cycle.
    pub fn outputs(&self, master: &AxiLiteMasterSignals) -> BridgeOutputs {
        BridgeOutputs {
            axi: self.axi_outputs(master),
            ahb: self.ahb_outputs(),
        }
    }

    /// Advances the bridge by one clock edge.
    ///
    /// # Arguments
    ///
    /// * `master` - AXI master signals driven during the cycle ending at this edge.
    /// * `slave` - AHB slave signals driven during the cycle ending at this edge.
    pub fn tick(&mut self, master: &AxiLiteMasterSignals, slave: &AhbSlaveSignals) {
        if self.in_reset {
            if self.release_pending {
                self.in_reset = false;
                self.release_pending = false;
                debug!("reset released");
            }
            return;
        }

        self.stats.cycles += 1;
        let axi = self.axi_outputs(master);
        let busy = !matches!(self.state, BridgeState::Idle);
        if busy && (master.awvalid || master.wvalid || master.arvalid) {
            self.stats.axi_stall_cycles += 1;
        }

        match self.state {
            BridgeState::Idle => {
                if let Some(req) = self.responder.sample(&axi, master) {
                    self.accept(req);
                }
            }
            BridgeState::AddrPhase => match self.initiator.tick(slave) {
                InitiatorEvent::AddressAccepted => self.transition(BridgeState::DataPhase),
                InitiatorEvent::Wait => self.stats.ahb_addr_wait_cycles += 1,
                InitiatorEvent::Idle | InitiatorEvent::Complete(_) => {}
            },
            BridgeState::DataPhase => match self.initiator.tick(slave) {
                InitiatorEvent::Complete(resp) => {
                    let direction = self
                        .current
                        .map_or(Direction::Read, |req| req.direction);
                    self.responder.post_response(AxiResponse {
                        direction,
                        resp: AxiResp::from(resp.status),
                        data: resp.data,
                    });
                    self.transition(BridgeState::Respond);
                }
                InitiatorEvent::Wait => self.stats.ahb_data_wait_cycles += 1,
                InitiatorEvent::Idle | InitiatorEvent::AddressAccepted => {}
            },
            BridgeState::Respond => {
                if self.responder.response_accepted(&axi, master) {
                    if let Some(resp) = self.responder.retire_response() {
                        self.stats.record_response(resp.direction, resp.resp);
                    }
                    self.current = None;
                    self.transition(BridgeState::Idle);
                } else {
                    self.stats.resp_wait_cycles += 1;
                }
            }
        }
    }

    /// Takes ownership of a complete request and starts its AHB transfer.
    fn accept(&mut self, req: AxiRequest) {
        let sel = self.selector.select(req.addr);

        if req.direction == Direction::Write
            && !sel.size.matches_strobe(sel.haddr.lane(), req.strobe)
        {
            self.stats.strobe_mismatches += 1;
            warn!(
                addr = %req.addr,
                size = %sel.size,
                strobe = req.strobe,
                "write strobe does not match selected transfer size"
            );
        }

        let transfer = AhbTransfer {
            haddr: sel.haddr,
            size: sel.size,
            direction: req.direction,
            data: req.data,
            prot: hprot_from_axprot(req.prot),
        };
        let started = self.initiator.start(transfer);
        debug_assert!(started, "initiator busy while the controller is idle");
        trace!(addr = %req.addr, haddr = %sel.haddr, size = %sel.size, "request accepted");
        self.stats.record_transfer(sel.size);
        self.current = Some(req);
        self.transition(BridgeState::AddrPhase);
    }

    fn transition(&mut self, next: BridgeState) {
        debug!(from = %self.state, to = %next, "bridge state");
        self.state = next;
    }
}

//! Bridge statistics collection and reporting.
//!
//! This module tracks activity of the bridge. It provides:
//! 1. **Traffic:** Cycles, completed reads and writes, and per-size transfer counts.
//! 2. **Responses:** `OKAY` versus `SLVERR` outcomes.
//! 3. **Stalls:** AHB wait states per phase, AXI backpressure, and response hold cycles.
//! 4. **Reset:** Transactions abandoned by reset.

use std::time::Instant;

use crate::bus::AxiResp;
use crate::common::{Direction, TransferSize};

/// Statistics gathered by the bridge controller.
#[derive(Clone, Debug)]
pub struct BridgeStats {
    start_time: Instant,
    /// Clock edges seen outside reset.
    pub cycles: u64,
    /// Write transactions whose response was accepted.
    pub writes: u64,
    /// Read transactions whose response was accepted.
    pub reads: u64,
    /// Responses delivered as `OKAY`.
    pub resp_okay: u64,
    /// Responses delivered as `SLVERR`.
    pub resp_slverr: u64,
    /// AHB transfers issued with `HSIZE` byte.
    pub transfers_byte: u64,
    /// AHB transfers issued with `HSIZE` halfword.
    pub transfers_halfword: u64,
    /// AHB transfers issued with `HSIZE` word.
    pub transfers_word: u64,
    /// Cycles the address phase was held by `HREADY` low.
    pub ahb_addr_wait_cycles: u64,
    /// Cycles the data phase was held by `HREADY` low.
    pub ahb_data_wait_cycles: u64,
    /// Cycles the master presented a valid request while the controller was busy.
    pub axi_stall_cycles: u64,
    /// Cycles a response waited for `BREADY`/`RREADY`.
    pub resp_wait_cycles: u64,
    /// Write requests whose strobe disagreed with the selected size.
    pub strobe_mismatches: u64,
    /// Transactions abandoned by reset after acceptance.
    pub aborted_by_reset: u64,
}

impl Default for BridgeStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            writes: 0,
            reads: 0,
            resp_okay: 0,
            resp_slverr: 0,
            transfers_byte: 0,
            transfers_halfword: 0,
            transfers_word: 0,
            ahb_addr_wait_cycles: 0,
            ahb_data_wait_cycles: 0,
            axi_stall_cycles: 0,
            resp_wait_cycles: 0,
            strobe_mismatches: 0,
            aborted_by_reset: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"traffic"`, `"stalls"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "traffic", "stalls"];

impl BridgeStats {
    /// Records an AHB transfer of the given size being issued.
    pub fn record_transfer(&mut self, size: TransferSize) {
        match size {
            TransferSize::Byte => self.transfers_byte += 1,
            TransferSize::Halfword => self.transfers_halfword += 1,
            TransferSize::Word => self.transfers_word += 1,
        }
    }

    /// Records a response accepted by the master.
    pub fn record_response(&mut self, direction: Direction, resp: AxiResp) {
        match direction {
            Direction::Write => self.writes += 1,
            Direction::Read => self.reads += 1,
        }
        if resp.is_ok() {
            self.resp_okay += 1;
        } else {
            self.resp_slverr += 1;
        }
    }

    /// Returns the number of completed transactions.
    pub const fn transactions(&self) -> u64 {
        self.writes + self.reads
    }

    /// Returns the average cycles per completed transaction, or zero if none completed.
    pub fn cycles_per_transaction(&self) -> f64 {
        let n = self.transactions();
        if n == 0 { 0.0 } else { self.cycles as f64 / n as f64 }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;

        if want("summary") {
            println!("\n==========================================================");
            println!("AXI4-LITE TO AHB-LITE BRIDGE STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("transactions             {}", self.transactions());
            println!("cycles_per_transaction   {:.2}", self.cycles_per_transaction());
            println!("----------------------------------------------------------");
        }
        if want("traffic") {
            println!("TRAFFIC");
            println!("  axi.writes             {}", self.writes);
            println!("  axi.reads              {}", self.reads);
            println!("  axi.resp.okay          {}", self.resp_okay);
            println!("  axi.resp.slverr        {}", self.resp_slverr);
            println!("  ahb.hsize.byte         {}", self.transfers_byte);
            println!("  ahb.hsize.halfword     {}", self.transfers_halfword);
            println!("  ahb.hsize.word         {}", self.transfers_word);
            println!("  strobe_mismatches      {}", self.strobe_mismatches);
            println!("  aborted_by_reset       {}", self.aborted_by_reset);
            println!("----------------------------------------------------------");
        }
        if want("stalls") {
            let pct = |v: u64| (v as f64 / cyc) * 100.0;
            println!("STALLS");
            println!(
                "  ahb.wait.addr          {} ({:.2}%)",
                self.ahb_addr_wait_cycles,
                pct(self.ahb_addr_wait_cycles)
            );
            println!(
                "  ahb.wait.data          {} ({:.2}%)",
                self.ahb_data_wait_cycles,
                pct(self.ahb_data_wait_cycles)
            );
            println!(
                "  axi.backpressure       {} ({:.2}%)",
                self.axi_stall_cycles,
                pct(self.axi_stall_cycles)
            );
            println!(
                "  axi.resp_wait          {} ({:.2}%)",
                self.resp_wait_cycles,
                pct(self.resp_wait_cycles)
            );
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

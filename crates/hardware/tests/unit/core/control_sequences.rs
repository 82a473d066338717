//! Control State Sequence Tests.
//!
//! Runs short programs through the full machine and compares the exact list of
//! control states visited against the expected schedule.

use pipesim_core::core::control::ControlState::{self, *};
use pipesim_core::isa::AluOp;
use pretty_assertions::assert_eq;

use crate::common::builder::*;
use crate::common::harness::TestContext;

const PIPE_FILL: [ControlState; 2] = [Fetch, LoadIr];

fn expected(parts: &[&[ControlState]]) -> Vec<ControlState> {
    parts.iter().flat_map(|p| p.iter().copied()).collect()
}

// ══════════════════════════════════════════════════════════
// 1. Straight-line programs
// ══════════════════════════════════════════════════════════

#[test]
fn halt_only() {
    let mut tc = TestContext::new().load_program(&[halt()]);
    assert_eq!(
        tc.states(100),
        expected(&[&PIPE_FILL, &[LoadRpl, ReadNext, DecodeDispatch]])
    );
}

#[test]
fn immediate_then_halt() {
    let mut tc = TestContext::new().load_program(&[lri(0, 1), halt()]);
    assert_eq!(
        tc.states(100),
        expected(&[
            &PIPE_FILL,
            &[LoadRpl, ReadNext, DecodeDispatch, Writeback],
            &[LoadRpl, ReadNext, DecodeDispatch],
        ])
    );
}

#[test]
fn each_memory_and_arithmetic_path() {
    let mut tc = TestContext::new().load_program(&[
        alu(AluOp::Add, 0, 0, 0),
        st(0, 5),
        ld(1, 5),
        halt(),
    ]);
    assert_eq!(
        tc.states(100),
        expected(&[
            &PIPE_FILL,
            &[LoadRpl, ReadNext, DecodeDispatch, ExecAlu, Writeback],
            &[LoadRpl, ReadNext, DecodeDispatch, ExecStore, Writeback],
            &[LoadRpl, ReadNext, DecodeDispatch, ExecLoad, Writeback],
            &[LoadRpl, ReadNext, DecodeDispatch],
        ])
    );
}

// ══════════════════════════════════════════════════════════
// 2. Jumps
// ══════════════════════════════════════════════════════════

#[test]
fn taken_jump_flushes_and_refetches() {
    let mut tc = TestContext::new().load_program(&[j(2), lri(1, 1), halt()]);
    assert_eq!(
        tc.states(100),
        expected(&[
            &PIPE_FILL,
            &[LoadRpl, ReadNext, DecodeDispatch, ExecJump],
            &[LoadRpl, Fetch, LoadIr],
            &[LoadRpl, ReadNext, DecodeDispatch],
        ])
    );
}

#[test]
fn untaken_jump_continues_without_flush() {
    // Flags are clear at reset, so JZ falls through.
    let mut tc = TestContext::new().load_program(&[jz(2), halt(), halt()]);
    assert_eq!(
        tc.states(100),
        expected(&[
            &PIPE_FILL,
            &[LoadRpl, ReadNext, DecodeDispatch, ExecJump],
            &[LoadRpl, ReadNext, DecodeDispatch],
        ])
    );
}

// ══════════════════════════════════════════════════════════
// 3. Halt is terminal
// ══════════════════════════════════════════════════════════

#[test]
fn no_steps_after_halt() {
    let mut tc = TestContext::new().load_program(&[halt()]);
    let steps = tc.run(100);
    let last = steps.last().expect("at least one step");
    assert!(last.halted());
    assert_eq!(last.dispatched, Some(pipesim_core::isa::Opcode::Halt));
    assert!(tc.sim.tick().is_none());
    assert_eq!(tc.sim.cycles(), 5);
    assert!(tc.run(10).is_empty());
}

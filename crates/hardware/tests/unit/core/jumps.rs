//! Jump and Flush Tests.
//!
//! Verifies that taken jumps redirect the program counter, that the instruction
//! fetched behind a taken jump never executes, that conditional jumps follow the
//! ALU flags, and that a taken conditional jump clears the flags it tested.

use pipesim_core::isa::AluOp;
use pipesim_core::stats::InstClass;

use crate::common::builder::*;
use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// 1. Unconditional jump
// ══════════════════════════════════════════════════════════

#[test]
fn jump_skips_the_prefetched_instruction() {
    // 0: J 3
    // 1: LRI r1, 9   (prefetched, must be discarded)
    // 2: HALT
    // 3: LRI r2, 7   (target)
    // 4: HALT
    let mut tc = TestContext::new().load_program(&[j(3), lri(1, 9), halt(), lri(2, 7), halt()]);
    assert_eq!(tc.run_to_halt(), 16);
    assert_eq!(tc.get_reg(1), 0, "r1 should NOT be written (flushed by jump)");
    assert_eq!(tc.get_reg(2), 7);
    assert_eq!(tc.sim.stats.flushes, 1);
    assert_eq!(tc.sim.stats.jumps_taken, 1);
}

#[test]
fn flush_flag_is_set_by_dispatch_and_cleared_by_load_rpl() {
    let mut tc = TestContext::new().load_program(&[j(2), halt(), halt()]);
    let steps = tc.run(5);
    assert!(steps.last().is_some_and(|s| s.jump_taken));
    assert!(tc.sim.flush_pending());

    let steps = tc.run(2);
    assert!(!steps[0].flushed);
    assert!(steps[1].flushed);
    assert!(!tc.sim.flush_pending());
}

#[test]
fn backward_jump_loops_until_the_limit() {
    let mut tc = TestContext::new().load_source("top: LRI r0, 1\n J top\n");
    let steps = tc.run(200);
    assert_eq!(steps.len(), 200);
    assert!(!tc.sim.is_halted());
    assert_eq!(tc.get_reg(0), 1);
}

// ══════════════════════════════════════════════════════════
// 2. Conditional jumps
// ══════════════════════════════════════════════════════════

#[test]
fn jz_taken_after_zero_result() {
    // 0: LRI r0, 5
    // 1: SUB r1, r0, r0   (Z)
    // 2: JZ 5
    // 3: LRI r2, 1        (skipped)
    // 4: HALT
    // 5: LRI r3, 2
    // 6: HALT
    let mut tc = TestContext::new().load_program(&[
        lri(0, 5),
        alu(AluOp::Sub, 1, 0, 0),
        jz(5),
        lri(2, 1),
        halt(),
        lri(3, 2),
        halt(),
    ]);
    assert_eq!(tc.run_to_halt(), 2 + 4 + 5 + 4 + 3 + 4 + 3);
    assert_eq!(tc.get_reg(2), 0);
    assert_eq!(tc.get_reg(3), 2);
    assert!(!tc.sim.datapath().alu.zero(), "taken JZ clears the flags");
}

#[test]
fn jz_falls_through_on_nonzero_result() {
    let mut tc = TestContext::new().load_program(&[
        lri(0, 5),
        lri(1, 3),
        alu(AluOp::Sub, 2, 0, 1),
        jz(6),
        lri(3, 1),
        halt(),
        lri(4, 1),
        halt(),
    ]);
    assert_eq!(tc.run_to_halt(), 2 + 4 + 4 + 5 + 4 + 4 + 3);
    assert_eq!(tc.get_reg(2), 2);
    assert_eq!(tc.get_reg(3), 1);
    assert_eq!(tc.get_reg(4), 0);
    assert_eq!(tc.sim.stats.jumps_not_taken, 1);
    assert_eq!(tc.sim.stats.flushes, 0);
}

#[test]
fn jn_taken_after_negative_result() {
    let mut tc = TestContext::new().load_program(&[
        lri(0, 5),
        lri(1, 3),
        alu(AluOp::Sub, 2, 1, 0),
        jn(6),
        lri(3, 1),
        halt(),
        lri(4, 1),
        halt(),
    ]);
    let _ = tc.run_to_halt();
    assert_eq!(tc.get_reg(2), 0xFE);
    assert_eq!(tc.get_reg(3), 0);
    assert_eq!(tc.get_reg(4), 1);
    assert!(!tc.sim.datapath().alu.negative());
}

#[test]
fn second_conditional_jump_taken_after_first() {
    // 0: LRI r0, 1
    // 1: SUB r1, r1, r0   (0 - 1 = 0xFF, N set)
    // 2: JN 4             (taken, flags cleared)
    // 3: HALT
    // 4: SUB r2, r0, r0   (Z set; flag reset must be released by now)
    // 5: JZ 7             (taken)
    // 6: LRI r5, 9        (skipped)
    // 7: HALT
    let mut tc = TestContext::new().load_program(&[
        lri(0, 1),
        alu(AluOp::Sub, 1, 1, 0),
        jn(4),
        halt(),
        alu(AluOp::Sub, 2, 0, 0),
        jz(7),
        lri(5, 9),
        halt(),
    ]);
    let _ = tc.run_to_halt();
    assert_eq!(tc.get_reg(1), 0xFF);
    assert_eq!(tc.get_reg(2), 0);
    assert_eq!(tc.get_reg(5), 0, "JZ must be taken after an earlier taken JN");
    assert_eq!(tc.sim.stats.jumps_taken, 2);
    assert_eq!(tc.sim.stats.jumps_not_taken, 0);
    assert_eq!(tc.sim.stats.flushes, 2);
    assert!(!tc.sim.datapath().alu.zero());
}

#[test]
fn flags_survive_non_alu_instructions() {
    // The flags set by SUB are still visible to JN after an LRI and a store.
    let mut tc = TestContext::new().load_program(&[
        lri(0, 1),
        alu(AluOp::Sub, 1, 1, 0),
        lri(5, 5),
        st(5, 10),
        jn(7),
        lri(6, 1),
        halt(),
        halt(),
    ]);
    let _ = tc.run_to_halt();
    assert_eq!(tc.get_reg(6), 0);
    assert_eq!(tc.get_mem(10), 5);
}

#[test]
fn countdown_loop() {
    let mut tc = TestContext::new().load_source(
        "      LRI r0, 3\n\
               LRI r1, 1\n\
         loop: SUB r0, r0, r1\n\
               JZ done\n\
               J loop\n\
         done: HALT\n",
    );
    let _ = tc.run_to_halt();
    assert_eq!(tc.get_reg(0), 0);
    assert_eq!(tc.sim.stats.dispatched(InstClass::Arithmetic), 3);
    assert_eq!(tc.sim.stats.jumps_taken, 3);
    assert_eq!(tc.sim.stats.jumps_not_taken, 2);
}

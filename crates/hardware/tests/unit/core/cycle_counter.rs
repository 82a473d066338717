//! Cycle Counter Properties.
//!
//! The counter advances exactly once per control step, whatever the state, and
//! its final value is the sum of the per-instruction costs.

use pipesim_core::isa::AluOp;
use proptest::prelude::*;

use crate::common::builder::*;
use crate::common::harness::TestContext;

#[derive(Clone, Copy, Debug)]
enum Item {
    Immediate(u32, u32),
    Load(u32, u32),
    Store(u32, u32),
    Arith(usize, u32, u32, u32),
}

impl Item {
    fn word(self) -> u32 {
        match self {
            Self::Immediate(rd, imm) => lri(rd, imm),
            Self::Load(rd, addr) => ld(rd, addr),
            Self::Store(rs, addr) => st(rs, addr),
            Self::Arith(op, rd, ra, rb) => alu(AluOp::ALL[op], rd, ra, rb),
        }
    }

    const fn cost(self) -> u64 {
        match self {
            Self::Immediate(..) => 4,
            _ => 5,
        }
    }
}

fn item() -> impl Strategy<Value = Item> {
    prop_oneof![
        (0u32..512, 0u32..256).prop_map(|(rd, imm)| Item::Immediate(rd, imm)),
        (0u32..512, 0u32..256).prop_map(|(rd, addr)| Item::Load(rd, addr)),
        (0u32..256, 0u32..512).prop_map(|(rs, addr)| Item::Store(rs, addr)),
        (0usize..9, 0u32..512, 0u32..256, 0u32..256)
            .prop_map(|(op, rd, ra, rb)| Item::Arith(op, rd, ra, rb)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn straight_line_cycles_are_the_sum_of_costs(items in prop::collection::vec(item(), 0..40)) {
        let mut words: Vec<u32> = items.iter().map(|i| i.word()).collect();
        words.push(halt());
        let mut tc = TestContext::new().load_program(&words);

        let steps = tc.run(10_000);
        let expected = 2 + items.iter().map(|i| i.cost()).sum::<u64>() + 3;
        prop_assert_eq!(tc.sim.cycles(), expected);
        prop_assert_eq!(steps.len() as u64, expected);
    }

    #[test]
    fn counter_tracks_every_step(limit in 1u64..300) {
        let mut tc = TestContext::new().load_source("top: J top\n");
        let steps = tc.run(limit);
        for (n, step) in steps.iter().enumerate() {
            prop_assert_eq!(step.cycle, n as u64 + 1);
        }
        prop_assert_eq!(tc.sim.cycles(), limit);
        prop_assert_eq!(tc.sim.stats.cycles, limit);
    }
}

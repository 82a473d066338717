use pipesim_core::common::{U8, U9};
use pipesim_core::config::Config;
use pipesim_core::core::control::{ControlState, Step};
use pipesim_core::sim::{Program, Simulator, parse_program};

pub struct TestContext {
    pub sim: Simulator,
    program: Program,
    config: Config,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("warn")
            .try_init();

        let config = Config::default();
        let program = Program::default();
        let sim = Simulator::new(&program, &config).expect("empty program loads");
        Self {
            sim,
            program,
            config,
        }
    }

    fn rebuild(mut self) -> Self {
        self.sim = Simulator::new(&self.program, &self.config).expect("program loads");
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self.rebuild()
    }

    /// Load raw instruction words at address 0.
    pub fn load_program(mut self, words: &[u32]) -> Self {
        self.program.words = words.to_vec();
        self.rebuild()
    }

    /// Assemble and load program text.
    pub fn load_source(mut self, source: &str) -> Self {
        self.program = parse_program(source).expect("program assembles");
        self.rebuild()
    }

    /// Preset a data-memory cell.
    pub fn with_data(mut self, addr: u32, value: u32) -> Self {
        self.program
            .data
            .push((U9::masked(addr), U8::masked(value)));
        self.rebuild()
    }

    /// Tick until `HALT` or `max` ticks, returning every step taken.
    pub fn run(&mut self, max: u64) -> Vec<Step> {
        let mut steps = Vec::new();
        for _ in 0..max {
            match self.sim.tick() {
                Some(step) => {
                    let done = step.halted();
                    steps.push(step);
                    if done {
                        break;
                    }
                }
                None => break,
            }
        }
        steps
    }

    /// Run to `HALT` under the default cycle limit and return the cycle count.
    pub fn run_to_halt(&mut self) -> u64 {
        self.sim.run().expect("program halts")
    }

    /// States visited until `HALT`.
    pub fn states(&mut self, max: u64) -> Vec<ControlState> {
        self.run(max).into_iter().map(|s| s.state).collect()
    }

    pub fn get_reg(&self, reg: u32) -> u32 {
        self.sim.register(reg).get()
    }

    pub fn get_mem(&self, addr: u32) -> u32 {
        self.sim.memory(addr).get()
    }
}

use typed_builder::TypedBuilder;

use crate::cpu::FlagPolicy;

/// Runtime options for a [`GameBoy`](crate::GameBoy).
#[derive(Clone, Debug, TypedBuilder)]
pub struct EmulatorConfig {
    /// HalfCarry behaviour of the ALU. Defaults to the build's
    /// `legacy-flags` feature.
    #[builder(default)]
    pub flag_policy: FlagPolicy,

    /// Stop `run()` after this many instructions.
    #[builder(default)]
    pub max_steps: Option<u64>,

    /// Stop `run()` as soon as PC reaches this address, before executing it.
    #[builder(default)]
    pub stop_at: Option<u16>,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

mod loop_hoisting;
pub use loop_hoisting::{
    optimise, HoistingStats, LoopHoister, LoopHoistingPass, HOISTED_NAME_PREFIX,
};

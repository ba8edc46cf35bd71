//! Prelude for s4t-smoothing.
//!
//! This module re-exports all commonly used smoothers and their configs.

// Moving averages
pub use crate::moving_average::{
    ema, output_len_after_ma, sma, wma,
    Ema, EmaConfig,
    Sma, SmaConfig,
    Wma, WmaConfig,
};

// Local filters
pub use crate::local::{
    smooth_adaptive, smooth_five_point, smooth_three_point,
    Adaptive, AdaptiveConfig,
    FivePoint, FivePointConfig,
    ThreePoint, ThreePointConfig,
};

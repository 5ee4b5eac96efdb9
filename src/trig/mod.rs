mod core;

pub use self::core::{
    approx_cos_proj, approx_sin_proj, unwrap_divs, FULL_TURN, HALF_TURN, QUARTER_TURN,
    THREE_QUARTER_TURN, TRIG_ACCURACY_MAX, TRIG_UNITY,
};

pub(crate) use self::core::{approx_cos_proj_traced, approx_sin_proj_traced};

pub const DEFAULT_STITCH_MIN: u64 = 1;
pub const DEFAULT_STITCH_MAX: u64 = 20;
pub const DEFAULT_FILTER_ID: f64 = 0.9;

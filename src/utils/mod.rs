mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{
    TimeUtils, format_hours, format_timestamp, hours_between, parse_timestamp_text,
};

pub use maths_utils::{mean, normalize_min_max};

pub(crate) use maths_utils::{central_moments, min_max};

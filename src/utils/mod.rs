mod time_utils;

pub use time_utils::{TimeUtils, iso_timestamp, now_utc, parse_sheet_date, today_local};

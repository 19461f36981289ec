pub(crate) mod date;
pub(crate) mod timezone;

pub(crate) use date::{format_date, next_day, parse_date};
pub(crate) use timezone::Timezone;

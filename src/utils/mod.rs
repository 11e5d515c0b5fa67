pub(crate) mod date;

pub(crate) use date::parse_range;

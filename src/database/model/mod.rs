pub(crate) mod last_update;
pub(crate) mod pharmacist;

/// Format of the dates stored as text.
pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

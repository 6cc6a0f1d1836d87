/// Convenience type for fatal run errors; per-record failures never use it
pub type Result<T = ()> = anyhow::Result<T>;

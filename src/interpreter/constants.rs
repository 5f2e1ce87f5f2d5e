// Constants for the Hexagony interpreter

/// Number of instruction pointers; `]`, `[` and `#` select among them modulo this
pub const IP_COUNT: usize = 6;

/// Value stored by `,` once input is exhausted
pub const END_OF_INPUT: i32 = -1;

/// Default memory budget for snapshot history (256 MB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 256 * 1024 * 1024;

/// Ticks executed and recorded before the time-travel UI opens
pub const DEFAULT_TUI_TICK_LIMIT: u64 = 10_000;

/// Fixed per-snapshot overhead used when estimating history size
pub const SNAPSHOT_BASE_SIZE: usize = 256;

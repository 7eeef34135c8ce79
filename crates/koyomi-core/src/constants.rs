/// Iteration limits shared across crates.
///
/// Occurrence enumeration and next-occurrence lookup are linear day scans;
/// these caps bound the worst case for pathological ranges. Callers that
/// need a longer horizon query successive windows.

/// Maximum number of calendar days a single range scan will visit.
pub const MAX_SCAN_DAYS: u32 = 1000;

/// How far ahead the next-occurrence probe looks, in days (inclusive).
pub const NEXT_OCCURRENCE_HORIZON_DAYS: u32 = 365;

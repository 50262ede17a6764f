/// Decimal precision for display values (percentages, rounded totals)
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Window length in days for the "spent this week" summary
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Default UI theme when none is stored
pub const DEFAULT_THEME: &str = "light";

/// Default base currency when none is stored
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Allocation chart palette, cycled by position in the rendered series.
pub const CHART_PALETTE: [&str; 7] = [
    "#3b82f6", "#10b981", "#f59e0b", "#a855f7", "#ef4444", "#06b6d4", "#f97316",
];

// Slice colors shared by the performance, goals and breakdown charts
pub const COLOR_BLUE: &str = "#3b82f6";
pub const COLOR_GREEN: &str = "#10b981";
pub const COLOR_AMBER: &str = "#f59e0b";
pub const COLOR_RED: &str = "#ef4444";
pub const COLOR_SLATE: &str = "#64748b";

// Slice labels
pub const LABEL_INVESTED: &str = "Invested";
pub const LABEL_GAINS: &str = "Gains";
pub const LABEL_CURRENT_VALUE: &str = "Current Value";
pub const LABEL_LOSS: &str = "Loss";
pub const LABEL_SAVED: &str = "Saved";
pub const LABEL_REMAINING: &str = "Remaining";
pub const LABEL_CURRENT: &str = "Current";
pub const LABEL_GAIN: &str = "Gain";
pub const LABEL_AVG_BUY: &str = "Avg Buy";
pub const LABEL_LAST_PRICE: &str = "Last Price";

/// Lowest questionnaire total classified as aggressive.
pub const AGGRESSIVE_MIN_SCORE: u32 = 13;

/// Lowest questionnaire total classified as moderate.
pub const MODERATE_MIN_SCORE: u32 = 7;

/// Minimum length accepted for a new password before it is sent upstream.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

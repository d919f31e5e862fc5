/// Page layout and interaction tuning constants.
///
/// These constants express intended behavior (default panel layout, stacking
/// steps, connector geometry) and keep magic numbers out of the code.
// Panels visible on first load and restored when the portfolio closes:
// Experience, Formation, Competences.
pub const DEFAULT_PANEL_FLAGS: [bool; 6] = [true, true, true, false, false, false];

// Skills/Loisirs share one container; the front tab gets the higher rank.
pub const PAIR_RANK_FRONT: u32 = 2;
pub const PAIR_RANK_BACK: u32 = 1;

// Floating window stacking
pub const WINDOW_Z_BASE: u64 = 1000;
pub const WINDOW_Z_STEP: u64 = 10;

// Connector lines
pub const LINE_DISTANCE_PERCENT: f32 = 12.0; // intermediate point offset, % of viewport width
pub const LINE_COLOR: &str = "black";
pub const LINE_WIDTH: f32 = 5.0;

// Anchor sits horizontally centered, 40% down the viewport.
pub const ANCHOR_X_FRACTION: f32 = 0.5;
pub const ANCHOR_Y_FRACTION: f32 = 0.4;

// Drag updates closer than this (px, per axis) to the last applied start are dropped.
pub const DRAG_JITTER_PX: f32 = 0.5;

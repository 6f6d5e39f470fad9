//! Generation constants and runtime configuration defaults

// Board defaults, sized for a phone-sized play field
/// Default number of rows
pub const DEFAULT_ROWS: usize = 5;
/// Default number of columns
pub const DEFAULT_COLS: usize = 5;
/// Default share of cells turned into obstacles
pub const DEFAULT_BLOCK_FRACTION: f64 = 0.08;

// Bounds the obstacle resampling loop before falling back to an open board
/// Maximum carve attempts with obstacles before the zero-obstacle fallback
pub const MAX_GENERATION_ATTEMPTS: usize = 50;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1_000;

// Persistence settings
/// Version tag written into save files
pub const SAVE_FORMAT_VERSION: u32 = 1;
/// Extension used for save files
pub const SAVE_FILE_EXTENSION: &str = "json";
/// File name prefix for puzzles written by batch generation
pub const BATCH_FILE_PREFIX: &str = "puzzle";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

//! Generation limits and runtime configuration defaults

/// Default seed metatile for the command-line tool
pub const DEFAULT_SEED_TYPE: &str = "P";

/// Default number of expansions
pub const DEFAULT_GENERATIONS: usize = 3;

// Tile count grows roughly sevenfold per generation
/// Largest accepted number of expansions
pub const MAX_GENERATIONS: usize = 8;

/// Default seed for random patch selection
pub const DEFAULT_RNG_SEED: u64 = 42;

// Output settings
/// Default output image path
pub const DEFAULT_OUTPUT: &str = "hats.png";
/// Default pixels per lattice unit
pub const DEFAULT_SCALE: u32 = 4;
/// Largest accepted pixels per lattice unit
pub const MAX_SCALE: u32 = 64;
/// Largest rendered image side in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;
/// Blank margin around the rendered patch in pixels
pub const IMAGE_MARGIN: u32 = 4;

// Rendering colours
/// Fill colour per metatile type, in table order
pub const HAT_COLOURS: [[u8; 4]; 4] = [
    [0xe8, 0xe2, 0xd0, 0xff],
    [0x9c, 0xc6, 0xe0, 0xff],
    [0xf2, 0xc9, 0x8b, 0xff],
    [0xb7, 0xd9, 0xa8, 0xff],
];
/// Fill colour of reflected hats
pub const REVERSED_HAT_COLOUR: [u8; 4] = [0x5a, 0x5a, 0x6e, 0xff];
/// Outline colour
pub const OUTLINE_COLOUR: [u8; 4] = [0x20, 0x20, 0x20, 0xff];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "monotile=warn";

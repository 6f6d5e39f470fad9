/// Randomized depth-first maze carving with obstacles
pub mod builder;
/// Bitset of grid cells used by the traversals
pub mod cellset;
/// Reachability from the start cell over current rotations
pub mod connectivity;
/// Seeded generation pipeline
pub mod generator;
/// Shortest start-to-end path search
pub mod solver;
/// Conversion of carved openings into scrambled tiles
pub mod synthesis;

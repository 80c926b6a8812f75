// Chessboard position enumeration modules
pub mod error;
pub mod generator;
pub mod position;

// Re-export main types for convenience
pub use error::GeneratorError;
pub use generator::{positions, PositionGenerator};
pub use position::Position;

pub mod health;
pub mod predict;


// Re-export handlers for easier imports
pub use health::health_check;
pub use predict::predict;

pub mod focus;
pub mod gesture;
pub mod motion;
pub mod palette;
pub mod tree;

pub mod choreography;
pub mod engine;
pub mod gesture;
pub mod scene;

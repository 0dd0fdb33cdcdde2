mod engine;

pub use engine::BatchEngine;

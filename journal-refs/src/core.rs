// src/core.rs
pub mod ignore;
pub mod renamer;
pub mod rewriter;
pub mod scanner;
pub mod transform;

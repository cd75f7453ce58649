pub mod app;
pub mod core;
pub mod render;
pub mod resolver;
pub mod run_effect;
#[cfg(test)]
mod tests;

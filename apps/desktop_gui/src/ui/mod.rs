//! UI layer: the app shell and the four visualizer panels.

pub mod app;
mod panels;

pub use app::NumvizApp;

pub mod canvas;
pub mod figure;
pub mod font;
pub mod heatmap;

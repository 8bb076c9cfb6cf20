pub mod algorithm;
pub mod colour_map;
pub mod colour_maps;
pub mod escape_time_field;
pub mod mandelbrot_config;
pub mod params;

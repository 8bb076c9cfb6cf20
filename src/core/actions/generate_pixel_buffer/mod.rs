pub mod generate_pixel_buffer;
pub mod normalize;
pub mod ports;

pub mod linspace;
pub mod nice_ticks;

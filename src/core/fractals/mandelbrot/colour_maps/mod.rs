pub mod blue_white_gradient;
pub mod factory;
pub mod fire_gradient;
pub mod gray;
pub mod hot;
pub mod kinds;
pub mod reversed;
pub mod sampled_gradient;

pub mod app;
pub mod camera;
pub mod zoom_readout;

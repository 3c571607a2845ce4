// Domain layer: page content, render inputs and the ports the renderer talks through.

pub mod guides;
pub mod model;
pub mod ports;

pub mod cluster;
pub mod distance;
pub mod proximity;
pub mod temporal;

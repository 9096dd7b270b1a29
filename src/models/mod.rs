pub mod coordinate;
pub mod event;
pub mod position;
pub mod proximity;

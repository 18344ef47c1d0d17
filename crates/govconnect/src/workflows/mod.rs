pub mod intake;
pub mod schemes;

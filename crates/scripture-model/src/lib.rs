pub mod canon;
pub mod sample;
pub mod verse;

pub use canon::*;
pub use sample::*;
pub use verse::*;

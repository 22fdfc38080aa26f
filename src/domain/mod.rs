pub mod detector;
pub mod entry;
pub mod extract;
pub mod message;
pub mod select;

pub use detector::*;
pub use entry::*;
pub use extract::*;
pub use message::*;
pub use select::*;

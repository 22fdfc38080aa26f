pub mod command_loop;
pub mod handle_entry;
pub mod poll_cycle;

pub use command_loop::*;
pub use handle_entry::*;
pub use poll_cycle::*;

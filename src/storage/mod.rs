mod adaptors;
mod entry;
mod log_store;
mod stable_store;


pub use adaptors::*;
pub use entry::*;
pub use log_store::*;
pub use stable_store::*;

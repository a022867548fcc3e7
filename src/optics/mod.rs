mod path;
mod setup;
mod snell;

pub use path::*;
pub use setup::*;
pub use snell::*;

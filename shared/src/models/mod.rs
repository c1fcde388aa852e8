mod servers;

pub use servers::*;

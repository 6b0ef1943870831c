pub mod response;
pub mod status;
pub mod stock;

pub use response::*;
pub use status::*;
pub use stock::*;

pub mod news;
pub mod responses;

pub use news::*;
pub use responses::*;

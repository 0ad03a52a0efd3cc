pub mod cache;
pub mod noti;
pub mod statusline;

pub use cache::*;
pub use noti::*;
pub use statusline::*;

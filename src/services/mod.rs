pub mod dispatch;
pub mod host;

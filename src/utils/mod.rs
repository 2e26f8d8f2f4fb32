pub mod debounce;
pub mod dom;
pub mod format;
pub mod palette;
pub mod shared;

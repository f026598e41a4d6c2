pub mod audio;
pub mod observability;

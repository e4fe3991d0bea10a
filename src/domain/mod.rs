pub mod audio;
pub mod folder;
pub mod shared;
pub mod translation;

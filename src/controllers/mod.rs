pub mod audio;
pub mod folder;
pub mod health;
pub mod media;
pub mod translate;

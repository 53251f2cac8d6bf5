pub mod closing;
pub mod nucleus;
pub mod profile;
pub mod reflection;
pub mod splash;
pub mod start;
pub mod wheel;

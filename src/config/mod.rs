pub mod modules;
pub mod settings;

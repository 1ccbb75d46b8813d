pub mod pool_loader;
pub mod toml_loader;

pub use pool_loader::load_questions_from_directory;
pub use toml_loader::load_config_file;

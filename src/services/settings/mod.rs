mod service;

pub use service::{
    default_config_path, default_storage_path, load_config, resolve_config, save_config,
};

pub mod path;

pub use path::{path_display_name, scope_path};

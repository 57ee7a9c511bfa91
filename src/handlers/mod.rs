pub mod create;
pub mod delete;
pub mod fallback;
pub mod get;
pub mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use fallback::not_found_handler;
pub use get::get_handler;
pub use update::update_handler;

mod auth;
mod extract;
mod health;
mod medicine;
mod profile;
mod summarize;

pub use auth::{login_handler, register_handler};
pub use extract::extract_handler;
pub use health::health_handler;
pub use medicine::{medicine_handler, medicine_info_handler, medicine_suggestions_handler};
pub use profile::{change_password_handler, get_user_handler, update_profile_image_handler};
pub use summarize::summarize_handler;

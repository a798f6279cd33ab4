pub mod admin;
mod destination;
mod home;
mod login;
mod not_found;
mod search;

pub use destination::DestinationDetail;
pub use home::{DestinationCard, Home};
pub use login::Login;
pub use not_found::NotFound;
pub use search::Search;

pub mod home;
pub mod results;

pub use home::home_page;
pub use results::results_page;

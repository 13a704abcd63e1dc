mod home;
pub use home::Home;

mod legal;
pub use legal::{Privacy, Terms};

mod about;
mod contact;
mod home;
mod programs;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use programs::ProgramsPage;

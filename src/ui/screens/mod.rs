pub mod home;
pub mod question;
pub mod result;

mod home;
pub use home::Home;

mod callback;
pub use callback::AuthCallback;

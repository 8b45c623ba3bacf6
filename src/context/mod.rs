pub mod alert;
pub mod user;

pub use alert::{use_alert, AlertContext, AlertProvider, PendingAlert};
pub use user::{use_user, UserContext, UserProvider};

pub mod http;
pub mod paises;
pub mod comedores;
pub mod dashboard;
pub mod survey_store;
pub mod migration;

pub use http::{Backend, HttpClient, Payload};

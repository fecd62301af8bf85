pub mod config;
pub mod form;
pub mod pages;
pub mod role;
pub mod routes;
pub mod session;
pub mod table;
pub mod validator;

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod layout;
pub mod notification;
pub mod symbols;
pub mod typeahead;
pub mod widgets;

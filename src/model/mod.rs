//! Request payloads shared between the controllers, services and views.

pub mod form;

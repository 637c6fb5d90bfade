//! Entity descriptors (`app`) and the table definitions bound to them (`db`).

pub mod app;

pub mod db;

#![allow(dead_code)]

pub mod models;
pub mod taksir_env;

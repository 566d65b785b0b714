// User administration and organization membership

pub mod commands;

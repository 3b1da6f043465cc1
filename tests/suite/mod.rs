mod binary;
mod config;
mod ordering;

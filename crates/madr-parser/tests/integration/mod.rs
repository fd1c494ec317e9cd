mod config;
mod sample_adr;
mod variants;

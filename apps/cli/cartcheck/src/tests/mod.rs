mod cli;
mod env_file;
mod logger;

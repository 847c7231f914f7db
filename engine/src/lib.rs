pub mod game;
pub mod id_generator;
pub mod logger;

pub mod pandascore_client;

pub use pandascore_client::PandaScoreClient;

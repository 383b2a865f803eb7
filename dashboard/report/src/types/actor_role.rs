use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Display,
)]
pub enum ActorRole {
    #[display("Client")]
    #[serde(rename = "client")]
    Client,
    #[display("Server")]
    #[serde(rename = "server")]
    Server,
}

impl ActorRole {
    /// Leading segment of every metric file written for this role.
    pub fn prefix(&self) -> &'static str {
        match self {
            ActorRole::Client => "client",
            ActorRole::Server => "server",
        }
    }
}

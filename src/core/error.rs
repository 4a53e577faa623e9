use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynergyError {
    #[error("Unknown pet: {0}")]
    UnknownPet(String),

    #[error("Pet already on the team: {0}")]
    DuplicatePet(String),

    #[error("You can select at most {max} pets")]
    TeamFull { max: usize },

    #[error("Pet needs {requested} slots but only {available} remain")]
    SlotCapacityExceeded { requested: u32, available: u32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SynergyError>;

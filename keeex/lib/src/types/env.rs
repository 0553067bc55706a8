//! Application variables readable and writable through `/util/env`.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Variables that can be read.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvVar {
    DataPath,
    KeeexPath,
    KeeexedPath,
    ReceivedPath,
    FilenameFormat,
}

/// Variables that can be written. Every writable variable is also readable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WritableEnvVar {
    KeeexedPath,
    ReceivedPath,
    FilenameFormat,
}

impl From<WritableEnvVar> for EnvVar {
    fn from(var: WritableEnvVar) -> Self {
        match var {
            WritableEnvVar::KeeexedPath => Self::KeeexedPath,
            WritableEnvVar::ReceivedPath => Self::ReceivedPath,
            WritableEnvVar::FilenameFormat => Self::FilenameFormat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names() {
        let names: Vec<String> = EnvVar::iter().map(|v| v.to_string()).collect();
        assert_eq!(
            names,
            [
                "DATA_PATH",
                "KEEEX_PATH",
                "KEEEXED_PATH",
                "RECEIVED_PATH",
                "FILENAME_FORMAT"
            ]
        );
    }

    #[test]
    fn test_writable_names_match_readable() {
        for var in WritableEnvVar::iter() {
            assert_eq!(var.as_ref(), EnvVar::from(var).as_ref());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("RECEIVED_PATH".parse::<WritableEnvVar>().unwrap(), WritableEnvVar::ReceivedPath);
        assert!("DATA_PATH".parse::<WritableEnvVar>().is_err());
    }
}

//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.parse::<T>().map_err(|_| Error::WrongFormat(name))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_parse_reads_number() {
        env::set_var("TEST_ENVS_TTL", "42");
        let val: i64 = get_env_parse("TEST_ENVS_TTL").unwrap();
        assert_eq!(val, 42);
    }

    #[test]
    fn test_get_env_parse_rejects_garbage() {
        env::set_var("TEST_ENVS_GARBAGE", "not-a-number");
        let result: Result<i64, Error> = get_env_parse("TEST_ENVS_GARBAGE");
        assert!(matches!(result, Err(Error::WrongFormat(_))));
    }

    #[test]
    fn test_missing_variable_is_reported() {
        let result = get_env("TEST_ENVS_DOES_NOT_EXIST");
        assert!(matches!(result, Err(Error::MissingEnv(_))));
    }
}

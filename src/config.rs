use crate::*;
use confique::Config as _;

#[derive(confique::Config)]
pub struct Config {
    /// Statement delimiter in force at the start of every script.
    #[config(env = "SQLEQ_DELIMITER", default = ";")]
    pub delimiter: String,
    /// Default log filter, used when `RUST_LOG` is not set.
    #[config(env = "SQLEQ_LOG", default = "warn")]
    pub log: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config::builder().env().load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confique::Config as _;

    #[test]
    fn defaults_apply_without_environment() {
        let config = Config::builder()
            .load()
            .expect("defaults should satisfy every field");
        assert_eq!(config.delimiter, ";");
        assert_eq!(config.log, "warn");
    }
}

use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "trackcoords.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub webserver: WebServer,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default(file_path: Option<PathBuf>) -> Result<Self> {
        let file_path = file_path.unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            PathBuf::from(DEFAULT_CONFIG_FILE_NAME)
        });
        let mut cfg = Self::try_load_from_file(&file_path)?;
        if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
            cfg.geocoding.use_opencage_api_key(api_key);
        }
        Ok(cfg)
    }

    fn try_load_from_file(file_path: &Path) -> Result<Self> {
        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Self::try_from(raw_config)
    }
}

pub struct WebServer {
    pub enable_cors: bool,
    /// Maximum size of an uploaded track file in bytes.
    pub max_upload_size: u64,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

impl Geocoding {
    /// An explicit API key always selects OpenCage.
    fn use_opencage_api_key(&mut self, api_key: String) {
        self.gateway = Some(GeocodingGateway::OpenCage { api_key });
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum GeocodingGateway {
    OpenCage { api_key: String },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            webserver,
            geocoding,
            gateway,
        } = from;

        let raw::WebServer {
            cors,
            max_upload_size,
        } = webserver.unwrap_or_default();

        if max_upload_size == 0 {
            return Err(anyhow!("The maximum upload size must not be zero"));
        }
        let webserver = WebServer {
            enable_cors: cors,
            max_upload_size,
        };

        let geo_gateway = match geocoding.unwrap_or_default().gateway {
            Some(raw::GeocodingGateway::Opencage) => {
                let raw::OpenCage { api_key } = gateway
                    .unwrap_or_default()
                    .opencage
                    .ok_or_else(|| anyhow!("Missing 'opencage' gateway configuration"))?;
                Some(GeocodingGateway::OpenCage { api_key })
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        Ok(Self {
            webserver,
            geocoding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_load_from_file(Path::new("does-not-exist.toml")).unwrap();
        assert!(!cfg.webserver.enable_cors);
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("trackcoords.toml");
        fs::write(
            &file_path,
            "[geocoding]\ngateway = \"opencage\"\n[gateway.opencage]\napi-key = \"secret\"\n",
        )
        .unwrap();
        let cfg = Config::try_load_from_file(&file_path).unwrap();
        assert_eq!(
            Some(GeocodingGateway::OpenCage {
                api_key: "secret".to_string()
            }),
            cfg.geocoding.gateway
        );
        assert_eq!(10 * 1024 * 1024, cfg.webserver.max_upload_size);
    }

    #[test]
    fn invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("trackcoords.toml");
        fs::write(&file_path, "[webserver\ncors = true").unwrap();
        assert!(Config::try_load_from_file(&file_path).is_err());
    }

    #[test]
    fn missing_opencage_gateway_config() {
        assert!(parse("[geocoding]\ngateway = \"opencage\"\n").is_err());
    }

    #[test]
    fn zero_upload_size() {
        assert!(parse("[webserver]\ncors = false\nmax-upload-size = 0\n").is_err());
    }

    #[test]
    fn api_key_selects_opencage() {
        let mut geocoding = Geocoding { gateway: None };
        geocoding.use_opencage_api_key("from-env".to_string());
        assert_eq!(
            Some(GeocodingGateway::OpenCage {
                api_key: "from-env".to_string()
            }),
            geocoding.gateway
        );
    }

    #[test]
    fn api_key_replaces_configured_key() {
        let mut cfg = parse(
            "[geocoding]\ngateway = \"opencage\"\n\
             [gateway.opencage]\napi-key = \"from-file\"\n",
        )
        .unwrap();
        cfg.geocoding.use_opencage_api_key("from-env".to_string());
        assert_eq!(
            Some(GeocodingGateway::OpenCage {
                api_key: "from-env".to_string()
            }),
            cfg.geocoding.gateway
        );
    }
}

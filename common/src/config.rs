use std::{net::IpAddr, path::PathBuf};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 7885;

pub const UUID_BY_NAME: &str = "https://api.mojang.com/users/profiles/minecraft/";
pub const PROFILE_BY_UUID: &str = "https://sessionserver.mojang.com/session/minecraft/profile/";

/// Runtime settings, read from flags or their `HH_*` environment variables.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Serves player head images cropped from skins")]
pub struct Config {
    #[arg(long, env = "HH_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "HH_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Directory holding one cached head per account id
    #[arg(long, env = "HH_CACHE_DIR", default_value = "./cache")]
    pub cache_dir: PathBuf,

    /// Image served whenever a head cannot be produced
    #[arg(long = "fallback", env = "HH_FALLBACK", default_value = "./fallback.png")]
    pub fallback_path: PathBuf,

    #[arg(long, env = "HH_NAME_LOOKUP_URL", default_value = UUID_BY_NAME)]
    pub name_lookup_url: String,

    #[arg(long, env = "HH_PROFILE_LOOKUP_URL", default_value = PROFILE_BY_UUID)]
    pub profile_lookup_url: String,

    /// Applies to every outbound request made by the shared client
    #[arg(long, env = "HH_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

//! Command-line arguments.
//!
//! The flags keep their historical single-dash spelling (`-newroom ITB-1101`);
//! [`normalize_flags`] rewrites them to the `--` form clap expects.

use std::ffi::OsString;

use clap::Parser;

const LONG_FLAGS: [&str; 4] = ["newroom", "oldroom", "usedns", "dupui"];

/// Duplicate a room, its devices and their ports in the configuration database.
#[derive(Parser, Debug)]
#[command(name = "roomdup", version, about)]
pub struct Args {
    /// Room to create, as `Building-Room`
    #[arg(long, default_value = "")]
    pub newroom: String,

    /// Room to copy, as `Building-Room`
    #[arg(long, default_value = "")]
    pub oldroom: String,

    /// Resolve each new device's address through DNS
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub usedns: bool,

    /// Copy the room's UI configuration file
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub dupui: bool,
}

impl Args {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }
}

/// Rewrite `-newroom`, `-usedns=false` and friends to their `--` spelling.
pub fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(flag) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

// SPDX-License-Identifier: MPL-2.0
use iced_trellis::gallery::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: parse_opt(&mut args, "--lang"),
        config_dir: parse_opt::<PathBuf>(&mut args, "--config-dir"),
        navigation: parse_opt::<PathBuf>(&mut args, "--navigation"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    gallery::run(flags)
}

fn parse_opt<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(flag = key, error = %err, "invalid flag value");
        None
    })
}

// SPDX-License-Identifier: MPL-2.0
use ehon::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Ehon - a picture book you page through

USAGE:
  ehon [OPTIONS]

OPTIONS:
  -h, --help              Print this help text
      --lang <LOCALE>     Interface language (e.g. ja, en-US)
      --config-dir <DIR>  Directory holding settings.toml

ENVIRONMENT:
  EHON_CONFIG_DIR         Same as --config-dir (the flag wins)
  RUST_LOG                Log filter, defaults to info
";

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = match args.opt_value_from_str::<_, String>("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            tracing::warn!(%err, "ignoring --lang");
            None
        }
    };
    let config_dir = match args.opt_value_from_str::<_, String>("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags { lang, config_dir })
}

// SPDX-License-Identifier: MPL-2.0
use toastbox::app::{self, paths, Flags};

const HELP: &str = "\
toastbox - five ways to show a desktop notification

USAGE:
  toastbox [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  --lang <LOCALE>          UI language (en-US, fr)
  --config-dir <DIR>       Directory holding settings.toml
                           (also TOASTBOX_CONFIG_DIR)
  --i18n-dir <DIR>         Directory with extra .ftl translation files

ENVIRONMENT:
  RUST_LOG                 Log filter (default: info)
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", rest);
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{}", HELP);
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

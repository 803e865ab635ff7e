// SPDX-License-Identifier: MPL-2.0
use dashboard_toasts::app::{self, Flags};
use env_logger::Env;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    let flash = args
        .values_from_str::<_, String>("--flash")
        .unwrap_or_else(|err| {
            log::warn!("ignoring --flash: {err}");
            Vec::new()
        })
        .iter()
        .map(|raw| Flags::parse_flash(raw))
        .collect();

    for extra in args.finish() {
        log::warn!("unexpected argument {}", extra.to_string_lossy());
    }

    app::run(Flags {
        lang,
        config_dir,
        flash,
    })
}

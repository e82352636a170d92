// SPDX-License-Identifier: MPL-2.0
use iced_peek::app::{self, paths, startup, Command, Flags};
use iced_peek::i18n::fluent::I18n;
use iced_peek::infrastructure::ImageRsCodec;
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let (file_path, config_dir) = match app::parse_args(std::env::args_os().skip(1).collect()) {
        Ok(Command::Help) => {
            print!("{}", startup::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run { file, config_dir }) => (file, config_dir),
        Err(reason) => {
            eprintln!("error: {reason}\n\n{}", startup::USAGE);
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(
        config_dir
            .as_ref()
            .map(|dir| dir.to_string_lossy().into_owned()),
    );

    let image = match app::startup_image(file_path.as_deref(), &ImageRsCodec::new()) {
        Ok(image) => image,
        Err(err) => {
            let i18n = I18n::default();
            MessageDialog::new()
                .set_level(MessageLevel::Error)
                .set_title(i18n.tr("window-title"))
                .set_description(i18n.tr_with_args(err.i18n_key(), &err.i18n_args()))
                .set_buttons(MessageButtons::Ok)
                .show();
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        file_path,
        image,
        config_dir,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("event loop failed: {err}");
            ExitCode::FAILURE
        }
    }
}

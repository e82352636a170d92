// SPDX-License-Identifier: MPL-2.0
//! Native file dialogs and modal notices, run as iced tasks.

use super::message::{Message, Retry};
use iced::Task;
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use std::path::PathBuf;

/// Labels shown by a file dialog.
#[derive(Debug, Clone)]
pub struct DialogText {
    pub title: String,
    pub filter_name: String,
}

/// Opens the "open image" dialog in `directory`.
pub fn pick_image(
    text: DialogText,
    extensions: Vec<&'static str>,
    directory: Option<PathBuf>,
) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = AsyncFileDialog::new()
                .set_title(text.title)
                .add_filter(text.filter_name, extensions.as_slice());

            if let Some(dir) = directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenDialogResult,
    )
}

/// Opens the "save as" dialog in `directory`, prefilled with `file_name`.
pub fn save_image(
    text: DialogText,
    extensions: Vec<&'static str>,
    directory: Option<PathBuf>,
    file_name: Option<String>,
) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = AsyncFileDialog::new()
                .set_title(text.title)
                .add_filter(text.filter_name, extensions.as_slice());

            if let Some(dir) = directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }
            if let Some(name) = file_name {
                dialog = dialog.set_file_name(name);
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Shows a modal error notice; `retry` names the dialog to reopen afterwards.
pub fn notice(title: String, description: String, retry: Option<Retry>) -> Task<Message> {
    Task::perform(
        async move {
            AsyncMessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title(title)
                .set_description(description)
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
        },
        move |()| Message::NoticeClosed(retry),
    )
}

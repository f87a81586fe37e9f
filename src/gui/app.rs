use std::path::PathBuf;

use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Alignment::Center, Element, Length, Subscription, Task, Theme, window};
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use crate::core::{ProjectStore, ThemePreference};
use crate::gui::state::Dialog;
use crate::gui::widgets::modal;
use crate::gui::Message;

#[derive(Debug, Clone)]
pub struct App {
    store: ProjectStore,
    theme: ThemePreference,
    theme_file: PathBuf,
    selected: Option<String>,
    dialog: Option<Dialog>,
}

impl App {
    pub fn new(store: ProjectStore, theme: ThemePreference, theme_file: PathBuf) -> Self {
        Self {
            store,
            theme,
            theme_file,
            selected: None,
            dialog: None,
        }
    }

    pub fn title(&self) -> String {
        "Harmony Cuts".to_string()
    }

    pub fn theme(&self) -> Theme {
        if self.theme.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::close_requests().map(Message::CloseRequested)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProjectSelected(name) => {
                self.selected = Some(name);
                Task::none()
            }
            Message::CreateRequested => {
                self.dialog = Some(Dialog::CreateProject {
                    name: String::new(),
                });
                Task::none()
            }
            Message::CreateNameChanged(input) => {
                if let Some(Dialog::CreateProject { name }) = &mut self.dialog {
                    *name = input;
                }
                Task::none()
            }
            Message::CreateCancelled => {
                self.dialog = None;
                Task::none()
            }
            Message::CreateConfirmed => {
                let Some(Dialog::CreateProject { name }) = self.dialog.take() else {
                    return Task::none();
                };
                let name = name.trim().to_string();
                if name.is_empty() {
                    // Confirming an empty name counts as cancelling.
                    return Task::none();
                }
                match self.store.create(&name) {
                    Ok(()) => {
                        tracing::info!(%name, "created project");
                        Task::none()
                    }
                    Err(err) => {
                        tracing::warn!(%name, %err, "failed to create project");
                        error_dialog("Create Project", format!("Could not create project: {err}"))
                    }
                }
            }
            Message::OpenRequested => {
                let Some(name) = self.selected.clone() else {
                    return Task::none();
                };
                Task::perform(
                    AsyncMessageDialog::new()
                        .set_level(MessageLevel::Info)
                        .set_title("Open Project")
                        .set_description(format!("Opening project: {name}"))
                        .show(),
                    |_| Message::OpenAcknowledged,
                )
            }
            Message::OpenAcknowledged => Task::none(),
            Message::DeleteRequested => {
                let Some(name) = self.selected.clone() else {
                    return Task::none();
                };
                Task::perform(
                    AsyncMessageDialog::new()
                        .set_level(MessageLevel::Warning)
                        .set_title("Delete Project")
                        .set_description(format!("Do you want to delete project: {name}?"))
                        .set_buttons(MessageButtons::YesNo)
                        .show(),
                    move |verdict| Message::DeleteDecided {
                        name: name.clone(),
                        confirmed: matches!(verdict, MessageDialogResult::Yes),
                    },
                )
            }
            Message::DeleteDecided { name, confirmed } => {
                if !confirmed {
                    return Task::none();
                }
                match self.store.delete(&name) {
                    Ok(()) => {
                        tracing::info!(%name, "deleted project");
                        self.selected = None;
                        Task::none()
                    }
                    Err(err) => {
                        tracing::warn!(%name, %err, "failed to delete project");
                        error_dialog("Delete Project", format!("Could not delete project: {err}"))
                    }
                }
            }
            Message::ErrorAcknowledged => Task::none(),
            Message::SettingsRequested => {
                self.dialog = Some(Dialog::Settings);
                Task::none()
            }
            Message::SettingsClosed => {
                self.dialog = None;
                Task::none()
            }
            Message::ThemeToggled => {
                self.theme.toggle();
                if let Err(err) = self.theme.save(&self.theme_file) {
                    tracing::warn!(
                        %err,
                        path = %self.theme_file.display(),
                        "failed to persist theme preference"
                    );
                }
                Task::none()
            }
            Message::CloseRequested(id) => Task::perform(
                AsyncMessageDialog::new()
                    .set_title("Exit Confirmation")
                    .set_description("Are you sure you want to exit Harmony Cuts?")
                    .set_buttons(MessageButtons::YesNo)
                    .show(),
                move |verdict| Message::ExitDecided {
                    window: id,
                    confirmed: matches!(verdict, MessageDialogResult::Yes),
                },
            ),
            Message::ExitDecided { window, confirmed } => {
                if confirmed {
                    window::close(window)
                } else {
                    Task::none()
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let entries = self.store.projects().iter().map(|name| {
            let is_selected = self.selected.as_deref() == Some(name.as_str());
            button(text(name))
                .width(Length::Fill)
                .style(if is_selected {
                    button::primary
                } else {
                    button::text
                })
                .on_press(Message::ProjectSelected(name.clone()))
                .into()
        });
        let list = scrollable(column(entries).spacing(2)).height(Length::Fill);

        let toolbar = row![
            button("Create Project").on_press(Message::CreateRequested),
            button("Open Project").on_press(Message::OpenRequested),
            button("Delete Project").on_press(Message::DeleteRequested),
            button("Settings").on_press(Message::SettingsRequested),
        ]
        .spacing(10);

        let base: Element<'_, Message> = column![list, toolbar].spacing(20).padding(20).into();

        match &self.dialog {
            None => base,
            Some(Dialog::CreateProject { name }) => {
                modal(base, self.create_dialog(name), Message::CreateCancelled)
            }
            Some(Dialog::Settings) => modal(base, self.settings_dialog(), Message::SettingsClosed),
        }
    }

    fn create_dialog<'a>(&self, name: &'a str) -> Element<'a, Message> {
        let content = column![
            text("Create Project").size(20),
            text_input("Enter project name:", name)
                .on_input(Message::CreateNameChanged)
                .on_submit(Message::CreateConfirmed),
            row![
                button("OK").on_press(Message::CreateConfirmed),
                button("Cancel").on_press(Message::CreateCancelled),
            ]
            .spacing(10),
        ]
        .spacing(20);

        container(content)
            .width(300)
            .padding(20)
            .style(container::rounded_box)
            .into()
    }

    fn settings_dialog(&self) -> Element<'_, Message> {
        // The button announces the action it will perform, not the current
        // state.
        let toggle_label = if self.theme.is_dark() {
            "Turn on Light Theme"
        } else {
            "Turn on Dark Theme"
        };

        let content = column![
            text("Settings").size(20),
            row![
                text("Theme:"),
                button(toggle_label).on_press(Message::ThemeToggled),
            ]
            .spacing(10)
            .align_y(Center),
            button("Close").on_press(Message::SettingsClosed),
        ]
        .spacing(20);

        container(content)
            .width(300)
            .padding(20)
            .style(container::rounded_box)
            .into()
    }
}

fn error_dialog(title: &str, description: String) -> Task<Message> {
    Task::perform(
        AsyncMessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(description)
            .show(),
        |_| Message::ErrorAcknowledged,
    )
}

use iced::window;

#[derive(Debug, Clone)]
pub enum Message {
    ProjectSelected(String),
    CreateRequested,
    CreateNameChanged(String),
    CreateConfirmed,
    CreateCancelled,
    OpenRequested,
    OpenAcknowledged,
    DeleteRequested,
    DeleteDecided { name: String, confirmed: bool },
    ErrorAcknowledged,
    SettingsRequested,
    SettingsClosed,
    ThemeToggled,
    CloseRequested(window::Id),
    ExitDecided { window: window::Id, confirmed: bool },
}

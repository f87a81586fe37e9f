/// The in-app dialog currently covering the main window, if any. Only one can
/// be open at a time; while it is open it exclusively receives input.
///
/// Yes/no and informational prompts are native message dialogs instead and
/// carry no state here.
#[derive(Debug, Clone)]
pub enum Dialog {
    CreateProject { name: String },
    Settings,
}

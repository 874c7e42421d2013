/// Every user-facing text in the application.
///
/// Variants carry the values interpolated into their text; the wording
/// itself lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),             // title
    TaskUpdated(String),             // title
    TaskDeleted(String),             // id
    TaskMoved(String, String),       // title, column
    TaskReordered(String),           // column
    TaskAlreadyInPlace,
    TaskNotFoundWithId(String),      // id
    TaskMoveFailed,
    TaskDeleteFailed,
    TaskDeleteCancelled,
    TaskChangedElsewhere,
    ConfirmDeleteTask(String),       // title
    TasksNotFound,
    TasksHeader(usize),              // count
    BoardHeader,
    BoardDetached,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleApi,
    ConfigModuleBoard,

    // === AUTHENTICATION MESSAGES ===
    LoggedIn,
    LoggedOut,
    NotLoggedIn,

    // === PROFILE MESSAGES ===
    ProfileUpdated(String),          // email or id
    ProfileDeleted,
    ProfileDeleteCancelled,
    ProfileDeleteNotConfirmed,
    ConfirmDeleteProfile,

    // === PROMPTS ===
    PromptApiUrl,
    PromptNoticeTtl,
    PromptAccessToken,
    PromptSelectModules,
}

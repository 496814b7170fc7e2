#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    GoDashboard,
    GoLearning,
    GoPractice,
    GoProgress,
    ToggleTheme,
    ScrollUp,
    ScrollDown,
    Select,
    None,
}

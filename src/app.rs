use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::Style,
};
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver};
use tui_textarea::TextArea;

use crate::action::Action;
use crate::data;
use crate::theme::{Subscription, Theme, ThemeMode, ThemeStore};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Dashboard,
    Learning,
    Practice,
    Progress,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Dashboard,
        View::Learning,
        View::Practice,
        View::Progress,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Learning => "Learning Path",
            View::Practice => "Practice Mode",
            View::Progress => "Your Progress",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Learning => "Learning Path",
            View::Practice => "Practice Mode",
            View::Progress => "Progress",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            View::Dashboard => "◈",
            View::Learning => "▤",
            View::Practice => "❯",
            View::Progress => "▲",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub enum TranscriptLine {
    Command(String),
    Output(String),
}

pub struct App<'a> {
    pub view: View,
    pub theme_store: ThemeStore,
    pub theme: Theme,
    theme_rx: Receiver<ThemeMode>,
    _theme_subscription: Subscription,

    pub lesson_idx: usize,
    pub explorer_idx: usize,
    pub transcript: Vec<TranscriptLine>,
    pub terminal_input: TextArea<'a>,

    pub key_map: HashMap<(KeyCode, KeyModifiers), Action>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(theme_store: ThemeStore) -> Self {
        let theme = Theme::new(theme_store.mode());

        // The store pushes every committed mode through this channel; the run
        // loop drains it before drawing, so no view renders a stale palette.
        let (theme_tx, theme_rx) = mpsc::channel();
        let subscription = theme_store.subscribe(move |mode| {
            let _ = theme_tx.send(mode);
        });

        let mut key_map = HashMap::new();
        key_map.insert((KeyCode::Char('q'), KeyModifiers::NONE), Action::Quit);
        key_map.insert((KeyCode::Char('q'), KeyModifiers::CONTROL), Action::Quit);
        key_map.insert((KeyCode::Tab, KeyModifiers::NONE), Action::NextView);
        key_map.insert((KeyCode::BackTab, KeyModifiers::SHIFT), Action::PrevView);
        key_map.insert((KeyCode::Char('t'), KeyModifiers::NONE), Action::ToggleTheme);
        key_map.insert((KeyCode::Char('t'), KeyModifiers::CONTROL), Action::ToggleTheme);
        key_map.insert((KeyCode::Char('1'), KeyModifiers::NONE), Action::GoDashboard);
        key_map.insert((KeyCode::Char('2'), KeyModifiers::NONE), Action::GoLearning);
        key_map.insert((KeyCode::Char('3'), KeyModifiers::NONE), Action::GoPractice);
        key_map.insert((KeyCode::Char('4'), KeyModifiers::NONE), Action::GoProgress);
        key_map.insert((KeyCode::Up, KeyModifiers::NONE), Action::ScrollUp);
        key_map.insert((KeyCode::Down, KeyModifiers::NONE), Action::ScrollDown);
        key_map.insert((KeyCode::Enter, KeyModifiers::NONE), Action::Select);

        // The sandbox opens with a `git status` already run, like the mock.
        let mut transcript = vec![TranscriptLine::Command("git status".to_string())];
        transcript.extend(
            data::GIT_STATUS_OUTPUT
                .iter()
                .map(|line| TranscriptLine::Output(line.to_string())),
        );

        Self {
            view: View::Dashboard,
            theme_store,
            theme,
            theme_rx,
            _theme_subscription: subscription,

            lesson_idx: 0,
            explorer_idx: 1, // index.js starts as the active file
            transcript,
            terminal_input: new_command_input(),

            key_map,
            should_quit: false,
        }
    }

    /// Rebuild the palette from any mode changes committed since the last
    /// draw. Called once per loop iteration.
    pub fn sync_theme(&mut self) {
        while let Ok(mode) = self.theme_rx.try_recv() {
            self.theme = Theme::new(mode);
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }
            if self.view == View::Practice {
                self.handle_practice_key(key);
            } else {
                let action = self
                    .key_map
                    .get(&(key.code, key.modifiers))
                    .copied()
                    .unwrap_or(Action::None);
                self.handle_action(action);
            }
        }
    }

    // In the practice workspace printable keys belong to the command line,
    // so only chords and navigation keys act globally.
    fn handle_practice_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => self.handle_action(Action::Quit),
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => self.handle_action(Action::ToggleTheme),
            (KeyCode::Tab, _) => self.handle_action(Action::NextView),
            (KeyCode::BackTab, _) => self.handle_action(Action::PrevView),
            (KeyCode::Esc, _) => self.handle_action(Action::GoDashboard),
            (KeyCode::Up, _) => self.handle_action(Action::ScrollUp),
            (KeyCode::Down, _) => self.handle_action(Action::ScrollDown),
            (KeyCode::Enter, _) => self.submit_command(),
            _ => {
                self.terminal_input.input(key);
            }
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextView => self.view = self.view.next(),
            Action::PrevView => self.view = self.view.prev(),
            Action::GoDashboard => self.view = View::Dashboard,
            Action::GoLearning => self.view = View::Learning,
            Action::GoPractice => self.view = View::Practice,
            Action::GoProgress => self.view = View::Progress,
            Action::ToggleTheme => {
                self.theme_store.toggle();
            }
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::Select => {
                // Lesson cards open the practice workspace.
                if self.view == View::Learning {
                    self.view = View::Practice;
                }
            }
            Action::None => {}
        }
    }

    fn scroll(&mut self, delta: i32) {
        match self.view {
            View::Learning => {
                let max = total_lessons() as i32 - 1;
                let next = (self.lesson_idx as i32 + delta).clamp(0, max);
                self.lesson_idx = next as usize;
            }
            View::Practice => {
                let max = data::EXPLORER.len() as i32 - 1;
                let next = (self.explorer_idx as i32 + delta).clamp(0, max);
                self.explorer_idx = next as usize;
            }
            _ => {}
        }
    }

    /// The entry the explorer cursor sits on, when it is a file.
    pub fn active_file(&self) -> Option<&'static str> {
        let entry = &data::EXPLORER[self.explorer_idx];
        (!entry.is_dir).then_some(entry.name)
    }

    fn submit_command(&mut self) {
        let command = self.terminal_input.lines()[0].trim().to_string();
        self.terminal_input = new_command_input();
        if command.is_empty() {
            return;
        }
        let responses = sandbox_response(&command);
        self.transcript.push(TranscriptLine::Command(command));
        self.transcript
            .extend(responses.into_iter().map(TranscriptLine::Output));
    }
}

fn new_command_input() -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_cursor_line_style(Style::default());
    input.set_placeholder_text("type command...");
    input
}

pub fn total_lessons() -> usize {
    data::MODULES.iter().map(|m| m.lessons.len()).sum()
}

// Canned sandbox replies. The terminal is a mock: nothing executes, a few
// git commands get plausible output.
fn sandbox_response(command: &str) -> Vec<String> {
    if command == "git status" {
        data::GIT_STATUS_OUTPUT
            .iter()
            .map(|line| line.to_string())
            .collect()
    } else if command == "git branch" {
        vec!["* main".to_string()]
    } else if let Some(name) = command.strip_prefix("git checkout -b ") {
        vec![format!("Switched to a new branch '{}'", name.trim())]
    } else if command.starts_with("git ") {
        vec!["sandbox: that command is not part of this lesson".to_string()]
    } else {
        vec!["sandbox: only git commands are simulated here".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn test_app() -> App<'static> {
        App::new(ThemeStore::new(ThemeMode::Light))
    }

    #[test]
    fn test_view_cycle_wraps() {
        assert_eq!(View::Progress.next(), View::Dashboard);
        assert_eq!(View::Dashboard.prev(), View::Progress);
        assert_eq!(View::Dashboard.next(), View::Learning);
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = test_app();
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.view, View::Learning);
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::BackTab,
            KeyModifiers::SHIFT,
        )));
        assert_eq!(app.view, View::Dashboard);
    }

    #[test]
    fn test_number_keys_jump_to_view() {
        let mut app = test_app();
        app.handle_event(key(KeyCode::Char('4')));
        assert_eq!(app.view, View::Progress);
        app.handle_event(key(KeyCode::Char('2')));
        assert_eq!(app.view, View::Learning);
    }

    #[test]
    fn test_q_quits_outside_practice() {
        let mut app = test_app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_toggle_updates_palette_before_next_draw() {
        let mut app = test_app();
        app.handle_event(key(KeyCode::Char('t')));
        app.sync_theme();
        assert_eq!(app.theme.mode, ThemeMode::Dark);
        assert_eq!(app.theme_store.mode(), ThemeMode::Dark);

        app.handle_event(key(KeyCode::Char('t')));
        app.sync_theme();
        assert_eq!(app.theme.mode, ThemeMode::Light);
    }

    #[test]
    fn test_practice_typing_feeds_command_line() {
        let mut app = test_app();
        app.view = View::Practice;
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.terminal_input.lines()[0], "q");

        app.handle_event(ctrl('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_practice_enter_extends_transcript() {
        let mut app = test_app();
        app.view = View::Practice;
        let before = app.transcript.len();
        app.terminal_input.insert_str("git checkout -b feature-cool");
        app.handle_event(key(KeyCode::Enter));

        assert_eq!(app.transcript.len(), before + 2);
        match &app.transcript[before] {
            TranscriptLine::Command(cmd) => assert_eq!(cmd, "git checkout -b feature-cool"),
            TranscriptLine::Output(_) => panic!("expected a command line"),
        }
        match &app.transcript[before + 1] {
            TranscriptLine::Output(out) => {
                assert_eq!(out, "Switched to a new branch 'feature-cool'")
            }
            TranscriptLine::Command(_) => panic!("expected command output"),
        }
        assert_eq!(app.terminal_input.lines()[0], "");
    }

    #[test]
    fn test_empty_command_is_ignored() {
        let mut app = test_app();
        app.view = View::Practice;
        let before = app.transcript.len();
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.transcript.len(), before);
    }

    #[test]
    fn test_explorer_selection_clamps() {
        let mut app = test_app();
        app.view = View::Practice;
        for _ in 0..10 {
            app.handle_event(key(KeyCode::Down));
        }
        assert_eq!(app.explorer_idx, data::EXPLORER.len() - 1);
        for _ in 0..10 {
            app.handle_event(key(KeyCode::Up));
        }
        assert_eq!(app.explorer_idx, 0);
        // src/ is a directory, not an openable file
        assert_eq!(app.active_file(), None);
    }

    #[test]
    fn test_lesson_select_opens_practice() {
        let mut app = test_app();
        app.view = View::Learning;
        app.handle_event(key(KeyCode::Down));
        assert_eq!(app.lesson_idx, 1);
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.view, View::Practice);
    }

    #[test]
    fn test_sandbox_responses() {
        assert_eq!(sandbox_response("git branch"), vec!["* main"]);
        assert_eq!(
            sandbox_response("git status").len(),
            data::GIT_STATUS_OUTPUT.len()
        );
        assert_eq!(
            sandbox_response("ls"),
            vec!["sandbox: only git commands are simulated here"]
        );
    }
}

//! Main menu and intro screen state (UI-agnostic).

/// Input actions for the menu screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    /// Enter or Space.
    Select,
    /// Esc or q.
    Back,
    Other,
}

/// What the app should do after a menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    StartGame,
    ShowIntro,
    ShowMenu,
    Quit,
}

/// Entries of the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Play,
    Intro,
    Quit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::Play, MenuEntry::Intro, MenuEntry::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Play => "Play",
            MenuEntry::Intro => "Intro",
            MenuEntry::Quit => "Quit",
        }
    }
}

pub const INTRO_LINES: [&str; 5] = [
    "Welcome to the Dragon Flappy Game!",
    "Press Space to jump during gameplay.",
    "Avoid the obstacles to survive.",
    "Press ESC to quit gameplay.",
    "Press Enter to return to menu.",
];

#[derive(Debug, Clone, Default)]
pub struct MainMenu {
    pub selected: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_entry(&self) -> MenuEntry {
        MenuEntry::ALL[self.selected % MenuEntry::ALL.len()]
    }

    pub fn navigate_up(&mut self) {
        let len = MenuEntry::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn navigate_down(&mut self) {
        self.selected = (self.selected + 1) % MenuEntry::ALL.len();
    }

    pub fn process_input(&mut self, input: MenuInput) -> MenuAction {
        match input {
            MenuInput::Up => {
                self.navigate_up();
                MenuAction::None
            }
            MenuInput::Down => {
                self.navigate_down();
                MenuAction::None
            }
            MenuInput::Select => match self.selected_entry() {
                MenuEntry::Play => MenuAction::StartGame,
                MenuEntry::Intro => MenuAction::ShowIntro,
                MenuEntry::Quit => MenuAction::Quit,
            },
            MenuInput::Back => MenuAction::Quit,
            MenuInput::Other => MenuAction::None,
        }
    }
}

/// The intro screen only knows how to go back.
pub fn process_intro_input(input: MenuInput) -> MenuAction {
    match input {
        MenuInput::Select | MenuInput::Back => MenuAction::ShowMenu,
        _ => MenuAction::None,
    }
}

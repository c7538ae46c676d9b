//! Keyboard accelerators for the downloads page

use crate::downloads::page::Command;

/// Host platform, which decides the modifier conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Mac,
    Other,
}

/// A key press with its modifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: char,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn alt(key: char) -> Self {
        Self {
            key,
            alt: true,
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: char) -> Self {
        Self {
            key,
            alt: false,
            ctrl: true,
            meta: false,
        }
    }

    pub fn meta(key: char) -> Self {
        Self {
            key,
            alt: false,
            ctrl: false,
            meta: true,
        }
    }
}

/// Maps a key press to a page command.
///
/// Clear-all is alt+c; a Mac keyboard produces "ç" for that combination
/// so the Mac binding matches on it. Undo is ctrl+z, or meta+z on Mac.
pub fn command_for_key(event: KeyEvent, platform: Platform) -> Option<Command> {
    let clear_key = match platform {
        Platform::Mac => 'ç',
        Platform::Other => 'c',
    };
    if event.alt && !event.ctrl && !event.meta && event.key == clear_key {
        return Some(Command::ClearAll);
    }

    let undo_modifier = match platform {
        Platform::Mac => event.meta && !event.ctrl,
        Platform::Other => event.ctrl && !event.meta,
    };
    if undo_modifier && !event.alt && event.key == 'z' {
        return Some(Command::Undo);
    }
    None
}

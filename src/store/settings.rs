//! 编辑器设置与声音偏好
//!
//! 只是纯数据；持久化由宿主负责，这里不做任何 I/O。

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::theme::DEFAULT_THEME;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    pub theme: CompactString,
    pub auto_complete: bool,
    pub bracket_matching: bool,
    pub voice_commands: bool,
    pub keyboard_size: u16,
    pub font_size: u16,
    pub line_numbers: bool,
    pub word_wrap: bool,
    pub syntax_highlighting: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            theme: CompactString::const_new(DEFAULT_THEME),
            auto_complete: true,
            bracket_matching: true,
            voice_commands: false,
            keyboard_size: 280,
            font_size: 14,
            line_numbers: true,
            word_wrap: false,
            syntax_highlighting: true,
        }
    }
}

/// Sound events the editor can announce. Playback lives outside the
/// library; the store only tracks the enabled flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEvent {
    KeyPress,
    TabSwitch,
    PageChange,
    Save,
    Run,
    Delete,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundSettings {
    pub key_press: bool,
    pub tab_switch: bool,
    pub page_change: bool,
    pub save: bool,
    pub run: bool,
    pub delete: bool,
    pub error: bool,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            key_press: true,
            tab_switch: true,
            page_change: true,
            save: true,
            run: true,
            delete: true,
            error: true,
        }
    }
}

impl SoundSettings {
    pub fn is_enabled(&self, event: SoundEvent) -> bool {
        match event {
            SoundEvent::KeyPress => self.key_press,
            SoundEvent::TabSwitch => self.tab_switch,
            SoundEvent::PageChange => self.page_change,
            SoundEvent::Save => self.save,
            SoundEvent::Run => self.run,
            SoundEvent::Delete => self.delete,
            SoundEvent::Error => self.error,
        }
    }

    pub fn set_enabled(&mut self, event: SoundEvent, enabled: bool) {
        match event {
            SoundEvent::KeyPress => self.key_press = enabled,
            SoundEvent::TabSwitch => self.tab_switch = enabled,
            SoundEvent::PageChange => self.page_change = enabled,
            SoundEvent::Save => self.save = enabled,
            SoundEvent::Run => self.run = enabled,
            SoundEvent::Delete => self.delete = enabled,
            SoundEvent::Error => self.error = enabled,
        }
    }
}

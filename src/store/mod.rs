//! 编辑器状态存储
//!
//! 职责：
//! - 打开文件集合与激活文件（SlotMap 键作为文件句柄）
//! - 编辑器设置与声音偏好
//!
//! 纯数据 + 显式变更函数（reducer 风格），不做文件 I/O，
//! 不做撤销/重做，不做持久化。

pub mod file_type;
pub mod settings;

use compact_str::CompactString;
use slotmap::SlotMap;

pub use file_type::FileType;
pub use settings::{EditorSettings, SoundEvent, SoundSettings};

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    UnknownFile,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::UnknownFile => write!(f, "file is not open in the store"),
        }
    }
}

impl std::error::Error for StoreError {}

slotmap::new_key_type! {
    pub struct FileId;
}

/// One open file.
#[derive(Clone, Debug)]
pub struct FileBuf {
    pub name: CompactString,
    pub content: String,
    pub file_type: FileType,
    pub modified: bool,
}

/// Whole-app state: open files plus user preferences.
#[derive(Default)]
pub struct EditorState {
    files: SlotMap<FileId, FileBuf>,
    open_order: Vec<FileId>,
    active: Option<FileId>,
    pub settings: EditorSettings,
    pub sounds: SoundSettings,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a file with the given content and make it active. Re-opening
    /// a name that is already open just activates the existing entry.
    pub fn open_file(&mut self, name: &str, content: String) -> FileId {
        if let Some(id) = self.find_by_name(name) {
            self.active = Some(id);
            return id;
        }

        let file_type = FileType::from_name(name);
        let id = self.files.insert(FileBuf {
            name: CompactString::from(name),
            content,
            file_type,
            modified: false,
        });
        self.open_order.push(id);
        self.active = Some(id);
        tracing::debug!(name, file_type = file_type.tag(), "file opened");
        id
    }

    /// Create a new empty file and make it active.
    pub fn create_file(&mut self, name: &str) -> FileId {
        let file_type = FileType::from_name(name);
        let id = self.files.insert(FileBuf {
            name: CompactString::from(name),
            content: String::new(),
            file_type,
            modified: false,
        });
        self.open_order.push(id);
        self.active = Some(id);
        tracing::debug!(name, file_type = file_type.tag(), "file created");
        id
    }

    /// Close a file. When the active file is closed the first remaining
    /// open file becomes active, or none when the store empties.
    pub fn close_file(&mut self, id: FileId) -> Result<()> {
        let file = self.files.remove(id).ok_or(StoreError::UnknownFile)?;
        self.open_order.retain(|&open| open != id);
        if self.active == Some(id) {
            self.active = self.open_order.first().copied();
        }
        tracing::debug!(name = %file.name, "file closed");
        Ok(())
    }

    pub fn set_active(&mut self, id: FileId) -> Result<()> {
        if !self.files.contains_key(id) {
            return Err(StoreError::UnknownFile);
        }
        self.active = Some(id);
        Ok(())
    }

    /// Replace a file's content. Identical content is a no-op and does not
    /// mark the file modified.
    pub fn update_content(&mut self, id: FileId, content: String) -> Result<()> {
        let file = self.files.get_mut(id).ok_or(StoreError::UnknownFile)?;
        if file.content != content {
            file.content = content;
            file.modified = true;
        }
        Ok(())
    }

    /// Host saved the file somewhere; clear the modified flag.
    pub fn mark_saved(&mut self, id: FileId) -> Result<()> {
        let file = self.files.get_mut(id).ok_or(StoreError::UnknownFile)?;
        file.modified = false;
        Ok(())
    }

    pub fn file(&self, id: FileId) -> Option<&FileBuf> {
        self.files.get(id)
    }

    pub fn active_id(&self) -> Option<FileId> {
        self.active
    }

    pub fn active_file(&self) -> Option<&FileBuf> {
        self.active.and_then(|id| self.files.get(id))
    }

    /// Open files in the order they were opened.
    pub fn open_files(&self) -> impl Iterator<Item = (FileId, &FileBuf)> {
        self.open_order
            .iter()
            .filter_map(|&id| self.files.get(id).map(|file| (id, file)))
    }

    pub fn open_count(&self) -> usize {
        self.open_order.len()
    }

    fn find_by_name(&self, name: &str) -> Option<FileId> {
        self.open_order
            .iter()
            .copied()
            .find(|&id| self.files.get(id).map(|f| f.name.as_str()) == Some(name))
    }

    // --- settings mutations ---

    pub fn set_theme(&mut self, theme: &str) {
        tracing::debug!(theme, "theme changed");
        self.settings.theme = CompactString::from(theme);
    }

    pub fn set_auto_complete(&mut self, enabled: bool) {
        self.settings.auto_complete = enabled;
    }

    pub fn set_bracket_matching(&mut self, enabled: bool) {
        self.settings.bracket_matching = enabled;
    }

    pub fn set_voice_commands(&mut self, enabled: bool) {
        self.settings.voice_commands = enabled;
    }

    pub fn set_keyboard_size(&mut self, size: u16) {
        self.settings.keyboard_size = size;
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.settings.font_size = size;
    }

    pub fn set_line_numbers(&mut self, enabled: bool) {
        self.settings.line_numbers = enabled;
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        self.settings.word_wrap = enabled;
    }

    pub fn set_syntax_highlighting(&mut self, enabled: bool) {
        self.settings.syntax_highlighting = enabled;
    }

    pub fn set_sound_enabled(&mut self, event: SoundEvent, enabled: bool) {
        self.sounds.set_enabled(event, enabled);
    }
}

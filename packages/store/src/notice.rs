//! Notification banner state.
//!
//! There is a single banner. Every [`NoticeBoard::show`] overwrites it at once
//! and bumps [`NoticeBoard::seq`]; whoever renders the board schedules one
//! auto-hide per bump. Hides are not tied to the notice that scheduled them, so
//! an older timer may hide a newer notice early.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Error,
    Success,
    Warning,
}

impl NoticeKind {
    /// Banner background colour.
    pub fn color(self) -> &'static str {
        match self {
            NoticeKind::Success => "#4CAF50",
            NoticeKind::Warning => "#ff9800",
            NoticeKind::Error => "#ff6b6b",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Error => "notice error",
            NoticeKind::Success => "notice success",
            NoticeKind::Warning => "notice warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    visible: bool,
    seq: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is displayed with `message`.
    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind) -> u64 {
        self.current = Some(Notice {
            message: message.into(),
            kind,
        });
        self.visible = true;
        self.seq += 1;
        self.seq
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// The notice on screen, if any.
    pub fn visible(&self) -> Option<&Notice> {
        if self.visible {
            self.current.as_ref()
        } else {
            None
        }
    }

    /// Number of `show` calls so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let board = NoticeBoard::new();
        assert!(board.visible().is_none());
        assert_eq!(board.seq(), 0);
    }

    #[test]
    fn test_latest_show_wins() {
        let mut board = NoticeBoard::new();
        board.show("first", NoticeKind::Error);
        board.show("second", NoticeKind::Success);
        let shown = board.visible().unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.kind, NoticeKind::Success);
        assert_eq!(board.seq(), 2);
    }

    #[test]
    fn test_any_hide_clears_current() {
        let mut board = NoticeBoard::new();
        board.show("first", NoticeKind::Error);
        board.show("second", NoticeKind::Warning);
        // the first notice's timer fires while the second is up
        board.hide();
        assert!(board.visible().is_none());
        assert_eq!(board.seq(), 2);

        board.show("third", NoticeKind::Success);
        assert_eq!(board.visible().map(|n| n.message.as_str()), Some("third"));
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(NoticeKind::Success.color(), "#4CAF50");
        assert_eq!(NoticeKind::Warning.color(), "#ff9800");
        assert_eq!(NoticeKind::default().color(), "#ff6b6b");
    }
}

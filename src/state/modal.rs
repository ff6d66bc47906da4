//! Info modal state and its outbound links

/// Owner contact links shown in the info modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoLink {
    Email,
    Instagram,
    Website,
}

impl InfoLink {
    pub const ALL: [InfoLink; 3] = [InfoLink::Email, InfoLink::Instagram, InfoLink::Website];

    pub fn label(&self) -> &'static str {
        match self {
            InfoLink::Email => "Email",
            InfoLink::Instagram => "Instagram",
            InfoLink::Website => "Website",
        }
    }

    /// Text shown next to the label
    pub fn display(&self) -> &'static str {
        match self {
            InfoLink::Email => "hello@mikabites.app",
            InfoLink::Instagram => "@mikabites",
            InfoLink::Website => "mikabites.app",
        }
    }

    /// URI handed to the platform opener
    pub fn uri(&self) -> &'static str {
        match self {
            InfoLink::Email => "mailto:hello@mikabites.app",
            InfoLink::Instagram => "https://instagram.com/mikabites",
            InfoLink::Website => "https://mikabites.app",
        }
    }
}

/// Input to the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// "Details" button in the gallery header
    Open,
    /// Close button or Escape
    Close,
    /// Press on the dimmed area around the content
    BackdropPressed,
    /// Press inside the content that hit nothing interactive
    ContentPressed,
    /// Press on one of the link rows
    LinkPressed(InfoLink),
}

/// Whether the info modal is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply an event; returns the link to open, if any
    ///
    /// Only `Close` and `BackdropPressed` dismiss. Presses inside the
    /// content, including link presses, leave the modal open.
    pub fn handle(&mut self, event: ModalEvent) -> Option<InfoLink> {
        match event {
            ModalEvent::Open => {
                self.open = true;
                None
            }
            ModalEvent::Close | ModalEvent::BackdropPressed => {
                self.open = false;
                None
            }
            ModalEvent::ContentPressed => None,
            ModalEvent::LinkPressed(link) if self.open => Some(link),
            ModalEvent::LinkPressed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!ModalState::default().is_open());
    }

    #[test]
    fn test_backdrop_press_dismisses() {
        let mut modal = ModalState::default();
        modal.handle(ModalEvent::Open);
        assert!(modal.is_open());

        modal.handle(ModalEvent::BackdropPressed);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_content_press_keeps_open() {
        let mut modal = ModalState::default();
        modal.handle(ModalEvent::Open);
        assert_eq!(modal.handle(ModalEvent::ContentPressed), None);
        assert!(modal.is_open());
    }

    #[test]
    fn test_link_press_opens_link_and_keeps_modal() {
        let mut modal = ModalState::default();
        modal.handle(ModalEvent::Open);

        let link = modal.handle(ModalEvent::LinkPressed(InfoLink::Website));
        assert_eq!(link, Some(InfoLink::Website));
        assert!(modal.is_open());
    }

    #[test]
    fn test_link_press_while_closed_is_ignored() {
        let mut modal = ModalState::default();
        assert_eq!(modal.handle(ModalEvent::LinkPressed(InfoLink::Email)), None);
    }

    #[test]
    fn test_close_button() {
        let mut modal = ModalState::default();
        modal.handle(ModalEvent::Open);
        modal.handle(ModalEvent::Close);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_link_uris() {
        assert!(InfoLink::Email.uri().starts_with("mailto:"));
        for link in InfoLink::ALL {
            assert!(!link.label().is_empty());
            assert!(link.uri().contains("mikabites"));
        }
    }
}

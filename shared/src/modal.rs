//! Project modal content and open/closed state.

use log::debug;

/// Image shown when an entry has none.
pub const DEFAULT_MODAL_IMAGE: &str = "images/default.jpeg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub title: &'static str,
    pub description: &'static str,
    /// External project page; the visit button is hidden without one.
    pub link: Option<&'static str>,
    pub image: Option<&'static str>,
}

impl ModalContent {
    pub fn image_or_default(&self) -> &'static str {
        self.image.unwrap_or(DEFAULT_MODAL_IMAGE)
    }
}

static MODAL_CONTENT: [(&'static str, ModalContent); 5] = [
    (
        "board",
        ModalContent {
            title: "Web Dev",
            description: "A lightweight POS and inventory system for two-wheeler garages, built \
                          with Flask, HTML, Tailwind CSS, and JSON storage.",
            link: Some("https://github.com/ULTRASIRI/POS-system-for-Gargi-Garage/"),
            image: Some("images/garagePOS.webp"),
        },
    ),
    (
        "board001",
        ModalContent {
            title: "Unity",
            description: "This is a simple 2D space-shooter game made in Unity where you control \
                          a spaceship and destroy incoming asteroids.",
            link: Some(
                "https://play.unity.com/en/games/d4a805ab-478b-4d53-bb5e-462388b13f9a/asteroid-shooter",
            ),
            image: Some("images/asteroidShooter.webp"),
        },
    ),
    (
        "board002",
        ModalContent {
            title: "threejs",
            description: "",
            link: None,
            image: Some("images/portf.webp"),
        },
    ),
    (
        "board003",
        ModalContent {
            title: "Project Four",
            description: "This is project Four",
            link: Some("https://example.com/"),
            image: Some("images/harry_potter.jpg"),
        },
    ),
    (
        "name",
        ModalContent {
            title: "This is name",
            description: "shree",
            link: None,
            image: Some("images/default.jpg"),
        },
    ),
];

/// Look up the modal shown for a scene node.
pub fn modal_content(name: &str) -> Option<&'static ModalContent> {
    entry(name).map(|(_, content)| content)
}

fn entry(name: &str) -> Option<&'static (&'static str, ModalContent)> {
    MODAL_CONTENT.iter().find(|(key, _)| *key == name)
}

/// At most one modal is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<&'static str>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Name of the node whose modal is showing.
    pub fn current(&self) -> Option<&'static str> {
        self.open
    }

    /// Open the modal for `name`.
    ///
    /// Returns the content to present, or `None` (state untouched) when a modal is already
    /// open or `name` has no entry.
    pub fn open(&mut self, name: &str) -> Option<&'static ModalContent> {
        if self.is_open() {
            return None;
        }
        let Some((key, content)) = entry(name) else {
            debug!("no modal content for {name:?}");
            return None;
        };
        self.open = Some(*key);
        Some(content)
    }

    /// Close the open modal. Returns whether one was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_known_entry_presents_its_content() {
        let mut state = ModalState::default();

        let content = state.open("board").expect("board has content");
        assert_eq!(content.title, "Web Dev");
        assert!(content.link.is_some());
        assert!(state.is_open());
        assert_eq!(state.current(), Some("board"));
    }

    #[test]
    fn opening_unknown_entry_is_a_no_op() {
        let mut state = ModalState::default();

        assert!(state.open("character").is_none());
        assert!(state.open("tuttle").is_none());
        assert_eq!(state, ModalState::default());
    }

    #[test]
    fn only_one_modal_at_a_time() {
        let mut state = ModalState::default();
        state.open("board001");

        assert!(state.open("board003").is_none());
        assert_eq!(state.current(), Some("board001"));

        assert!(state.close());
        assert!(!state.close());
        assert!(state.open("board003").is_some());
    }

    #[test]
    fn entries_without_link_hide_the_visit_button() {
        assert_eq!(modal_content("board002").and_then(|c| c.link), None);
        assert_eq!(modal_content("name").and_then(|c| c.link), None);
    }

    #[test]
    fn missing_image_falls_back_to_default() {
        let content = ModalContent {
            title: "t",
            description: "d",
            link: None,
            image: None,
        };
        assert_eq!(content.image_or_default(), DEFAULT_MODAL_IMAGE);
        assert_eq!(
            modal_content("board").map(|c| c.image_or_default()),
            Some("images/garagePOS.webp")
        );
    }
}

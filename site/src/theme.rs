//! Light/dark theme toggle.
//!
//! The active mode lives on the page as the presence of the `.dark-mode`
//! class on the root container (`<body>`). The toggle button's label always
//! names the mode a click will switch *to*. No preference is persisted, so
//! every page load starts in [`ThemeMode::Light`].
//!
//! The mode logic is pure; DOM access is confined to [`ThemeSurface`]
//! implementations. The browser surface only exists with the `hydrate`
//! feature.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// CSS class carried by the root container while dark mode is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Element id of the toggle button.
pub const TOGGLE_BUTTON_ID: &str = "theme-toggle-btn";

/// Visual presentation mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Map the root container's class flag to a mode.
    #[must_use]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other mode. Applying this twice returns the original mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Button label shown while this mode is active.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "☀️ Light Mode",
            Self::Light => "🌙 Dark Mode",
        }
    }
}

/// Side-effecting boundary between the toggle and whatever displays it.
pub trait ThemeSurface {
    /// Current mode as read from the root container.
    fn mode(&self) -> ThemeMode;

    /// Write `mode` to the root container and relabel the button.
    fn apply(&mut self, mode: ThemeMode);
}

/// Flip the surface to the other mode and return the new mode.
pub fn toggle<S: ThemeSurface + ?Sized>(surface: &mut S) -> ThemeMode {
    let next = surface.mode().toggled();
    surface.apply(next);
    next
}

#[cfg(feature = "hydrate")]
pub use dom::{DomSurface, bind_document, initialize};

#[cfg(feature = "hydrate")]
mod dom {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, Event};

    use super::{DARK_MODE_CLASS, TOGGLE_BUTTON_ID, ThemeMode, ThemeSurface, toggle};

    /// Theme surface over a live button and root element.
    pub struct DomSurface {
        button: Element,
        root: Element,
    }

    impl DomSurface {
        pub fn new(button: Element, root: Element) -> Self {
            Self { button, root }
        }
    }

    impl ThemeSurface for DomSurface {
        fn mode(&self) -> ThemeMode {
            ThemeMode::from_dark_flag(self.root.class_list().contains(DARK_MODE_CLASS))
        }

        fn apply(&mut self, mode: ThemeMode) {
            let class_list = self.root.class_list();
            let result = if mode.is_dark() {
                class_list.add_1(DARK_MODE_CLASS)
            } else {
                class_list.remove_1(DARK_MODE_CLASS)
            };
            if result.is_err() {
                log::warn!("failed to update {DARK_MODE_CLASS} class");
            }
            self.button.set_text_content(Some(mode.toggle_label()));
        }
    }

    /// Register the click listener that toggles `root` and relabels `button`.
    ///
    /// The listener lives for the rest of the page.
    pub fn initialize(button: Element, root: Element) {
        let target = button.clone();
        let mut surface = DomSurface::new(button, root);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let mode = toggle(&mut surface);
            log::debug!("theme switched to {mode:?}");
        });
        if target
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach theme toggle listener");
            return;
        }
        on_click.forget();
    }

    /// Attach the toggle to `#theme-toggle-btn` and `<body>`.
    ///
    /// Does nothing when either element is missing.
    pub fn bind_document() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(button) = document.get_element_by_id(TOGGLE_BUTTON_ID) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        initialize(button, body.into());
    }
}

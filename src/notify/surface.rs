// SPDX-License-Identifier: MPL-2.0
//! Registry of open windows.
//!
//! Every window the application opens is recorded here with what it shows.
//! Removing an entry is the only way a window gets forgotten, so callers
//! issue the platform close only when [`Surfaces::remove`] returns the
//! entry. A window is therefore destroyed at most once, and timers firing
//! for a forgotten window find nothing to act on.

use super::banner::SlideBanner;
use super::popup::Popup;
use super::toast::Toast;
use iced::task;
use iced::window;
use std::collections::HashMap;
use std::fmt;

/// What a window is showing.
#[derive(Debug)]
pub enum Surface {
    /// The window with the trigger buttons.
    Main,
    Toast(Toast),
    Popup(Popup),
    Banner(BannerEntry),
}

impl Surface {
    /// Short name used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Surface::Main => "main",
            Surface::Toast(_) => "toast",
            Surface::Popup(_) => "popup",
            Surface::Banner(_) => "banner",
        }
    }
}

/// A banner and its pending dwell timer.
pub struct BannerEntry {
    pub banner: SlideBanner,
    /// Aborts the dwell timer when dropped.
    dwell_timer: Option<task::Handle>,
}

impl fmt::Debug for BannerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerEntry")
            .field("banner", &self.banner)
            .field("dwell_pending", &self.dwell_timer.is_some())
            .finish()
    }
}

impl BannerEntry {
    #[must_use]
    pub fn new(banner: SlideBanner) -> Self {
        Self {
            banner,
            dwell_timer: None,
        }
    }

    /// Keeps the dwell timer alive for as long as this entry lives.
    pub fn arm_dwell(&mut self, handle: task::Handle) {
        self.dwell_timer = Some(handle.abort_on_drop());
    }

    /// Forgets the dwell timer, aborting it if it has not fired yet.
    ///
    /// Returns the aborted handle, if a timer was armed.
    pub fn disarm_dwell(&mut self) -> Option<task::Handle> {
        let handle = self.dwell_timer.take()?;
        handle.abort();
        Some(handle)
    }

    #[must_use]
    pub fn has_pending_dwell(&self) -> bool {
        self.dwell_timer.is_some()
    }
}

/// Open windows keyed by id, plus lifetime counters.
#[derive(Debug, Default)]
pub struct Surfaces {
    windows: HashMap<window::Id, Surface>,
    opened: usize,
    closed: usize,
}

impl Surfaces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly opened window.
    pub fn insert(&mut self, id: window::Id, surface: Surface) {
        log::debug!("{} window {:?} opened", surface.kind(), id);
        if self.windows.insert(id, surface).is_none() {
            self.opened += 1;
        }
    }

    /// Forgets a window. Returns its surface the first time only.
    pub fn remove(&mut self, id: window::Id) -> Option<Surface> {
        let mut surface = self.windows.remove(&id)?;
        if let Surface::Banner(entry) = &mut surface {
            entry.banner.close();
            entry.disarm_dwell();
        }
        self.closed += 1;
        log::debug!("{} window {:?} closed", surface.kind(), id);
        Some(surface)
    }

    #[must_use]
    pub fn get(&self, id: window::Id) -> Option<&Surface> {
        self.windows.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: window::Id) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn banner_mut(&mut self, id: window::Id) -> Option<&mut BannerEntry> {
        match self.windows.get_mut(&id) {
            Some(Surface::Banner(entry)) => Some(entry),
            _ => None,
        }
    }

    /// Ids of every open window.
    pub fn ids(&self) -> impl Iterator<Item = window::Id> + '_ {
        self.windows.keys().copied()
    }

    /// Ids of the banners that need animation ticks.
    #[must_use]
    pub fn moving_banners(&self) -> Vec<window::Id> {
        self.windows
            .iter()
            .filter_map(|(id, surface)| match surface {
                Surface::Banner(entry) if entry.banner.is_moving() => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn has_moving_banners(&self) -> bool {
        self.windows.values().any(|surface| {
            matches!(surface, Surface::Banner(entry) if entry.banner.is_moving())
        })
    }

    /// Number of windows currently open.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Windows recorded since startup.
    #[must_use]
    pub fn opened(&self) -> usize {
        self.opened
    }

    /// Windows forgotten since startup.
    #[must_use]
    pub fn closed(&self) -> usize {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::banner::{Motion, Phase};
    use crate::notify::timer::one_shot;
    use iced::Task;
    use std::time::Duration;

    fn banner_surface() -> Surface {
        Surface::Banner(BannerEntry::new(SlideBanner::new(
            1920,
            280,
            &Motion::default(),
        )))
    }

    #[test]
    fn new_registry_is_empty() {
        let surfaces = Surfaces::new();
        assert!(surfaces.is_empty());
        assert_eq!(surfaces.opened(), 0);
        assert_eq!(surfaces.closed(), 0);
    }

    #[test]
    fn toast_is_removed_exactly_once() {
        let mut surfaces = Surfaces::new();
        let id = window::Id::unique();
        surfaces.insert(
            id,
            Surface::Toast(Toast::new("toast-message", Duration::from_secs(3))),
        );

        assert!(surfaces.remove(id).is_some());
        assert!(surfaces.remove(id).is_none());
        assert_eq!(surfaces.opened(), 1);
        assert_eq!(surfaces.closed(), 1);
    }

    #[test]
    fn popup_is_removed_exactly_once() {
        let mut surfaces = Surfaces::new();
        let id = window::Id::unique();
        surfaces.insert(id, Surface::Popup(Popup::new("popup-title", "popup-message")));

        assert!(matches!(surfaces.remove(id), Some(Surface::Popup(_))));
        assert!(surfaces.remove(id).is_none());
        assert_eq!(surfaces.closed(), 1);
    }

    #[test]
    fn only_moving_banners_are_listed() {
        let mut surfaces = Surfaces::new();
        let moving = window::Id::unique();
        let resting = window::Id::unique();
        surfaces.insert(moving, banner_surface());
        surfaces.insert(resting, banner_surface());
        surfaces.insert(window::Id::unique(), Surface::Main);

        let entry = surfaces.banner_mut(resting).expect("banner");
        while entry.banner.is_moving() {
            entry.banner.tick();
        }

        assert_eq!(surfaces.moving_banners(), vec![moving]);
        assert!(surfaces.has_moving_banners());
    }

    #[test]
    fn removing_a_banner_closes_it_and_drops_the_dwell_timer() {
        let mut surfaces = Surfaces::new();
        let id = window::Id::unique();
        surfaces.insert(id, banner_surface());

        let (_task, handle) = Task::<()>::done(()).abortable();
        surfaces.banner_mut(id).expect("banner").arm_dwell(handle);
        assert!(surfaces.banner_mut(id).expect("banner").has_pending_dwell());

        match surfaces.remove(id) {
            Some(Surface::Banner(entry)) => {
                assert_eq!(entry.banner.phase(), Phase::Closed);
                assert!(!entry.has_pending_dwell());
            }
            other => panic!("expected banner, got {:?}", other),
        }
        assert!(!surfaces.has_moving_banners());
    }

    #[test]
    fn disarming_aborts_the_armed_dwell_timer() {
        let motion = Motion::default();
        let mut entry = BannerEntry::new(SlideBanner::new(1920, 280, &motion));
        let (_timer, handle) = one_shot(motion.dwell, ()).abortable();
        entry.arm_dwell(handle);

        let handle = entry.disarm_dwell().expect("timer was armed");

        assert!(handle.is_aborted());
        assert!(!entry.has_pending_dwell());
        assert!(entry.disarm_dwell().is_none());
    }

    #[test]
    fn banner_mut_ignores_other_surfaces() {
        let mut surfaces = Surfaces::new();
        let id = window::Id::unique();
        surfaces.insert(id, Surface::Main);
        assert!(surfaces.banner_mut(id).is_none());
        assert!(surfaces.contains(id));
    }
}

//! Cross-viewer state propagation.
//!
//! A [`ViewerGroup`] owns a fixed, ordered set of viewers and a
//! [`SyncPolicy`]. Commands dispatched with [`Origin::External`] are applied
//! locally and then fanned out to every other viewer as [`Origin::Internal`]
//! commands, per enabled flag:
//!
//! - intensity: the exact `(lo, hi)` window;
//! - slice + orientation: the orientation, then the *raw* slice index. Each
//!   receiver clamps it to its own depth; indices are not rescaled between
//!   volumes of different size;
//! - view: the view rect as fractions of the source slice size, re-expanded
//!   against each receiver's own slice size.
//!
//! Internal commands never fan out again, which is what keeps two synced
//! viewers from driving each other forever.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::command::{Command, Origin, PointerEvent};
use crate::config::ViewerConfig;
use crate::geometry::{Rect, ViewRect};
use crate::interaction::Tool;
use crate::viewer::{Viewer, ViewerId};
use crate::viewport::WindowLevel;
use crate::volume::Volume;

/// Which kinds of state are mirrored across the group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncPolicy {
    pub sync_intensity: bool,
    pub sync_view: bool,
    pub sync_slice_and_orientation: bool,
}

impl SyncPolicy {
    pub fn get(&self, flag: SyncFlag) -> bool {
        match flag {
            SyncFlag::Intensity => self.sync_intensity,
            SyncFlag::View => self.sync_view,
            SyncFlag::SliceAndOrientation => self.sync_slice_and_orientation,
        }
    }

    pub fn set(&mut self, flag: SyncFlag, enabled: bool) {
        match flag {
            SyncFlag::Intensity => self.sync_intensity = enabled,
            SyncFlag::View => self.sync_view = enabled,
            SyncFlag::SliceAndOrientation => self.sync_slice_and_orientation = enabled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyncFlag {
    Intensity,
    View,
    SliceAndOrientation,
}

impl SyncFlag {
    pub const ALL: &[Self] = &[Self::Intensity, Self::View, Self::SliceAndOrientation];

    /// The flag that governs propagation of `command`.
    pub fn for_command(command: &Command) -> Self {
        match command {
            Command::SetWindowLevel(_) => Self::Intensity,
            Command::SetOrientation(_) | Command::SetSlice(_) => Self::SliceAndOrientation,
            Command::PanBy { .. } | Command::SetViewRect(_) | Command::ResetView => Self::View,
        }
    }
}

impl fmt::Display for SyncFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intensity => write!(f, "Sync intensity"),
            Self::View => write!(f, "Sync view"),
            Self::SliceAndOrientation => write!(f, "Sync slice"),
        }
    }
}

/// An applied change, as seen by listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChangeEvent {
    pub viewer: ViewerId,
    pub command: Command,
    pub origin: Origin,
}

pub type ChangeListener = Box<dyn FnMut(&ChangeEvent)>;

/// Viewers created together, plus the policy that links them.
pub struct ViewerGroup {
    viewers: Vec<Viewer>,
    /// First viewer created, or the first survivor after it was removed.
    reference: Option<ViewerId>,
    policy: SyncPolicy,
    config: ViewerConfig,
    next_id: u32,
    listeners: Vec<ChangeListener>,
}

impl ViewerGroup {
    /// Empty group. The config's initial sync flags are not applied until
    /// viewers exist; see [`with_volumes`](Self::with_volumes).
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            viewers: Vec::new(),
            reference: None,
            policy: SyncPolicy::default(),
            config,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// One viewer per volume, in order, then the configured sync flags are
    /// switched on (each pushing the reference viewer's state).
    pub fn with_volumes(
        volumes: impl IntoIterator<Item = Arc<Volume>>,
        config: ViewerConfig,
    ) -> Self {
        let initial = config.sync;
        let mut group = Self::new(config);
        for volume in volumes {
            group.add_viewer(volume);
        }
        for &flag in SyncFlag::ALL {
            if initial.get(flag) {
                group.set_sync(flag, true);
            }
        }
        group
    }

    /// Add a viewer. It adopts the reference viewer's state for every
    /// enabled sync flag.
    pub fn add_viewer(&mut self, volume: Arc<Volume>) -> ViewerId {
        let id = ViewerId::from(self.next_id);
        self.next_id += 1;
        self.viewers.push(Viewer::new(id, volume, &self.config));

        let reference = *self.reference.get_or_insert(id);
        if reference != id {
            for &flag in SyncFlag::ALL {
                if self.policy.get(flag) {
                    self.fan_out(reference, flag, &[id]);
                }
            }
        }
        id
    }

    pub fn remove_viewer(&mut self, id: ViewerId) -> bool {
        let before = self.viewers.len();
        self.viewers.retain(|v| v.id() != id);
        if self.viewers.len() == before {
            return false;
        }
        if self.reference == Some(id) {
            self.reference = self.viewers.first().map(Viewer::id);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.viewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewers.is_empty()
    }

    pub fn ids(&self) -> Vec<ViewerId> {
        self.viewers.iter().map(Viewer::id).collect()
    }

    pub fn viewers(&self) -> impl Iterator<Item = &Viewer> {
        self.viewers.iter()
    }

    pub fn viewer(&self, id: ViewerId) -> Option<&Viewer> {
        self.viewers.iter().find(|v| v.id() == id)
    }

    fn viewer_mut(&mut self, id: ViewerId) -> Option<&mut Viewer> {
        let found = self.viewers.iter_mut().find(|v| v.id() == id);
        if found.is_none() {
            warn!(viewer = %id, "no such viewer");
        }
        found
    }

    pub fn reference(&self) -> Option<ViewerId> {
        self.reference
    }

    pub fn policy(&self) -> SyncPolicy {
        self.policy
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Register a callback run once per applied command.
    pub fn subscribe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Toggle a sync flag. Switching it on pushes the reference viewer's
    /// state to all others once.
    pub fn set_sync(&mut self, flag: SyncFlag, enabled: bool) {
        let was_enabled = self.policy.get(flag);
        self.policy.set(flag, enabled);
        if !enabled || was_enabled {
            return;
        }
        if let Some(reference) = self.reference {
            let targets: Vec<ViewerId> = self
                .viewers
                .iter()
                .map(Viewer::id)
                .filter(|&id| id != reference)
                .collect();
            self.fan_out(reference, flag, &targets);
        }
    }

    /// Resize a viewer's display surface (re-renders it).
    pub fn resize(&mut self, id: ViewerId, display_rect: Rect) -> bool {
        self.viewer_mut(id)
            .is_some_and(|viewer| viewer.resize(display_rect))
    }

    pub fn set_tool(&mut self, id: ViewerId, tool: Tool) {
        if let Some(viewer) = self.viewer_mut(id) {
            viewer.set_tool(tool);
        }
    }

    /// Select `tool` on a viewer, or deselect it if already active.
    pub fn toggle_tool(&mut self, id: ViewerId, tool: Tool) -> Tool {
        self.viewer_mut(id)
            .map_or(Tool::None, |viewer| viewer.toggle_tool(tool))
    }

    /// Route a pointer event to a viewer; gestures are dispatched as
    /// external changes.
    pub fn pointer(&mut self, id: ViewerId, event: PointerEvent) -> bool {
        let command = self
            .viewer_mut(id)
            .and_then(|viewer| viewer.handle_pointer(event));
        match command {
            Some(command) => self.dispatch(id, command, Origin::External),
            None => false,
        }
    }

    /// Commit the two window-level text fields. Malformed text is ignored
    /// and the previous window level stays.
    pub fn commit_window_level_text(&mut self, id: ViewerId, lo: &str, hi: &str) -> bool {
        match WindowLevel::parse(lo, hi) {
            Some(window) => self.dispatch(id, Command::SetWindowLevel(window), Origin::External),
            None => false,
        }
    }

    /// Apply `command` to one viewer. External changes that altered state
    /// are fanned out per the policy; internal ones never are.
    pub fn dispatch(&mut self, id: ViewerId, command: Command, origin: Origin) -> bool {
        let Some(viewer) = self.viewer_mut(id) else {
            return false;
        };
        if !viewer.apply(&command) {
            return false;
        }

        let event = ChangeEvent {
            viewer: id,
            command,
            origin,
        };
        for listener in &mut self.listeners {
            listener(&event);
        }

        if origin == Origin::External {
            let flag = SyncFlag::for_command(&command);
            if self.policy.get(flag) {
                let targets: Vec<ViewerId> = self
                    .viewers
                    .iter()
                    .map(Viewer::id)
                    .filter(|&other| other != id)
                    .collect();
                self.fan_out(id, flag, &targets);
            }
        }
        true
    }

    /// Push `source`'s state for `flag` to `targets` as internal commands.
    fn fan_out(&mut self, source: ViewerId, flag: SyncFlag, targets: &[ViewerId]) {
        let Some(src) = self.viewer(source) else {
            return;
        };
        let state = src.state().clone();
        let (src_w, src_h) = src.slice_size();
        debug!(source = %source, ?flag, targets = targets.len(), "sync fan-out");

        for &target in targets {
            if target == source {
                continue;
            }
            let commands = match flag {
                SyncFlag::Intensity => vec![Command::SetWindowLevel(state.window_level)],
                // Raw index: receivers clamp, they do not rescale.
                SyncFlag::SliceAndOrientation => vec![
                    Command::SetOrientation(state.orientation),
                    Command::SetSlice(state.slice_index),
                ],
                SyncFlag::View => match (state.view_rect, self.viewer(target)) {
                    (None, _) => vec![Command::ResetView],
                    (Some(rect), Some(dst)) => {
                        let (dst_w, dst_h) = dst.slice_size();
                        let rel = rect.to_relative(src_w, src_h);
                        vec![Command::SetViewRect(ViewRect::from_relative(
                            rel, dst_w, dst_h,
                        ))]
                    }
                    (Some(_), None) => continue,
                },
            };
            for command in commands {
                self.dispatch(target, command, Origin::Internal);
            }
        }
    }
}

//! The interactive board editor.
//!
//! [`TacticalEditor`] owns an items-only scene and turns discrete UI
//! gestures into scene mutations: dropping a library icon on the canvas,
//! dragging an item, editing the selected item's properties and deleting
//! it. Every mutation is reported synchronously to a [`SceneSink`] with a
//! complete snapshot of the scene.
//!
//! Pointer positions are in the pixel space of the host UI; the editor maps
//! them to percentage coordinates through the canvas [`CanvasBounds`].

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, trace};
use thiserror::Error;

use tactiboard_core::{
    color::Color,
    geometry::{CanvasBounds, Point},
    icon::{self, IconCategory, IconDefinition},
    scene::{BoardItem, TacticalSchema},
};

use crate::{
    config::EditorConfig,
    export::svg::{RenderedBoard, Renderer},
};

/// Description attached to every scene the editor reports.
pub const EDITOR_DESCRIPTION: &str = "Custom Diagram";

/// Failure of an editor operation.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    #[error("No icon is being placed")]
    NoPendingPlacement,

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Receives the scene after every mutation.
///
/// The owning lesson-plan document implements this to persist the scene
/// into the drill being edited.
pub trait SceneSink {
    fn scene_changed(&mut self, scene: TacticalSchema);
}

impl<F> SceneSink for F
where
    F: FnMut(TacticalSchema),
{
    fn scene_changed(&mut self, scene: TacticalSchema) {
        self(scene)
    }
}

/// A sink that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl SceneSink for NoopSink {
    fn scene_changed(&mut self, _scene: TacticalSchema) {}
}

/// Editing session over the items of one scene.
///
/// Players, arrows and zones are never created or edited here; the reported
/// scene always carries items only.
///
/// # Examples
///
/// ```
/// use tactiboard::{config::EditorConfig, editor::{NoopSink, TacticalEditor}};
/// use tactiboard_core::geometry::{CanvasBounds, Point};
///
/// let canvas = CanvasBounds::new(0.0, 0.0, 600.0, 400.0);
/// let mut editor = TacticalEditor::new(EditorConfig::default(), NoopSink);
///
/// editor.begin_placement("cone").unwrap();
/// editor.complete_placement(Point::new(300.0, 200.0), canvas).unwrap();
/// assert_eq!(editor.items().len(), 1);
/// assert_eq!(editor.selected().unwrap().position(), Point::new(50.0, 50.0));
/// ```
#[derive(Debug)]
pub struct TacticalEditor<S: SceneSink> {
    items: Vec<BoardItem>,
    selected: Option<String>,
    dragging: bool,
    pending: Option<&'static IconDefinition>,
    description: String,
    config: EditorConfig,
    last_id: u128,
    sink: S,
}

impl<S: SceneSink> TacticalEditor<S> {
    /// Starts an editing session on an empty board.
    pub fn new(config: EditorConfig, sink: S) -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            dragging: false,
            pending: None,
            description: EDITOR_DESCRIPTION.to_string(),
            config,
            last_id: 0,
            sink,
        }
    }

    /// Starts an editing session on the items of an existing scene.
    ///
    /// Players, arrows and zones of `schema` are not carried over.
    pub fn from_schema(schema: &TacticalSchema, config: EditorConfig, sink: S) -> Self {
        let mut editor = Self::new(config, sink);
        editor.items = schema.items().to_vec();
        editor
    }

    /// Sets the description reported with every scene.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns the icon currently being dragged from the palette.
    pub fn pending_placement(&self) -> Option<&'static IconDefinition> {
        self.pending
    }

    /// Returns the selected item.
    pub fn selected(&self) -> Option<&BoardItem> {
        let id = self.selected.as_deref()?;
        self.items.iter().find(|item| item.id() == id)
    }

    fn selected_mut(&mut self) -> Option<&mut BoardItem> {
        let id = self.selected.as_deref()?;
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// The current scene: the items with empty players, arrows and zones.
    pub fn scene(&self) -> TacticalSchema {
        TacticalSchema::from_items(self.description.clone(), self.items.clone())
    }

    /// Icon library entries grouped for the palette.
    pub fn palette(&self) -> Vec<(IconCategory, Vec<&'static IconDefinition>)> {
        icon::palette()
    }

    /// Renders the current scene.
    pub fn render(&self, renderer: &Renderer, sport: &str) -> RenderedBoard {
        renderer.render(&self.scene(), sport)
    }

    fn notify(&mut self) {
        let scene = self.scene();
        trace!(items = scene.items().len(); "Scene changed");
        self.sink.scene_changed(scene);
    }

    /// Millisecond timestamps, bumped when two items are created within the
    /// same millisecond.
    fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }

    // --- Placement ---

    /// Starts dragging a library icon towards the canvas.
    pub fn begin_placement(&mut self, icon_id: &str) -> Result<(), EditorError> {
        let definition = icon::lookup(icon_id).ok_or_else(|| EditorError::UnknownIcon(icon_id.to_string()))?;
        debug!(icon = icon_id; "Placement started");
        self.pending = Some(definition);
        Ok(())
    }

    /// Abandons the icon being dragged.
    pub fn cancel_placement(&mut self) {
        self.pending = None;
    }

    /// Drops the pending icon at `pointer`.
    ///
    /// The new item gets a fresh id, no rotation, the configured default
    /// scale and the icon's default color, and becomes the selection. A drop
    /// outside the canvas or on a zero-size canvas creates nothing and
    /// returns `Ok(None)`.
    pub fn complete_placement(
        &mut self,
        pointer: Point,
        canvas: CanvasBounds,
    ) -> Result<Option<&BoardItem>, EditorError> {
        let definition = self.pending.take().ok_or(EditorError::NoPendingPlacement)?;

        let position = match canvas.to_percent(pointer) {
            Some(position) if canvas.contains(pointer) => position,
            _ => {
                debug!(icon = definition.id(); "Drop outside the canvas ignored");
                return Ok(None);
            }
        };

        let id = self.next_id();
        let item = BoardItem::new(id.clone(), definition.id(), position)
            .with_scale(self.config.default_scale())
            .with_color(definition.default_color().map(str::to_string));
        info!(item = id.as_str(), icon = definition.id(); "Item placed");

        self.items.push(item);
        self.selected = Some(id);
        self.notify();
        Ok(self.items.last())
    }

    // --- Dragging ---

    /// Selects the item with `id` and starts dragging it.
    ///
    /// Returns false when no such item exists.
    pub fn press_item(&mut self, id: &str) -> bool {
        if !self.items.iter().any(|item| item.id() == id) {
            return false;
        }
        self.selected = Some(id.to_string());
        self.dragging = true;
        debug!(item = id; "Drag started");
        true
    }

    /// Presses the topmost item whose anchor lies within the hit radius of
    /// `pointer`. A miss leaves the selection unchanged.
    pub fn pointer_down(&mut self, pointer: Point, canvas: CanvasBounds) -> bool {
        let radius = self.config.hit_radius();
        let hit = self
            .items
            .iter()
            .rev()
            .find(|item| canvas.to_pixels(item.position()).distance(pointer) <= radius)
            .map(|item| item.id().to_string());

        match hit {
            Some(id) => self.press_item(&id),
            None => false,
        }
    }

    /// Moves the dragged item under the pointer, clamped to the canvas.
    ///
    /// Returns true when an item moved.
    pub fn pointer_move(&mut self, pointer: Point, canvas: CanvasBounds) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(position) = canvas.to_clamped_percent(pointer) else {
            return false;
        };
        let Some(item) = self.selected_mut() else {
            return false;
        };
        item.set_position(position);
        self.notify();
        true
    }

    /// Ends the drag.
    pub fn pointer_up(&mut self) {
        if self.dragging {
            debug!("Drag ended");
        }
        self.dragging = false;
    }

    /// Ends the drag when the pointer leaves the canvas.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    // --- Properties of the selected item ---

    fn update_selected(&mut self, update: impl FnOnce(&mut BoardItem)) -> bool {
        let Some(item) = self.selected_mut() else {
            return false;
        };
        update(item);
        self.notify();
        true
    }

    /// Sets the rotation of the selected item, clamped to `[0, 360]`.
    pub fn set_rotation(&mut self, degrees: f32) -> bool {
        self.update_selected(|item| item.set_rotation(degrees))
    }

    /// Sets the scale of the selected item, clamped to `[0.05, 0.3]`.
    pub fn set_scale(&mut self, scale: f32) -> bool {
        self.update_selected(|item| item.set_scale(scale))
    }

    /// Sets the color override of the selected item; `None` restores the
    /// icon default.
    pub fn set_color(&mut self, color: Option<&str>) -> Result<bool, EditorError> {
        if let Some(color) = color {
            Color::new(color).map_err(|_| EditorError::InvalidColor(color.to_string()))?;
        }
        Ok(self.update_selected(|item| item.set_color(color.map(str::to_string))))
    }

    /// Sets the caption of the selected item; empty removes it.
    pub fn set_label(&mut self, label: &str) -> bool {
        self.update_selected(|item| item.set_label(label))
    }

    /// Removes the selected item and clears the selection.
    pub fn delete_selected(&mut self) -> Option<BoardItem> {
        let id = self.selected.take()?;
        let index = self.items.iter().position(|item| item.id() == id)?;
        let removed = self.items.remove(index);
        self.dragging = false;
        info!(item = id.as_str(); "Item deleted");
        self.notify();
        Some(removed)
    }
}

// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use quill_geometry::{bounds_overlap, is_finite_point};
use quill_imaging::Surface;
use quill_ink::{
    FreehandStroke, GraphicsLine, GraphicsPrimitive, Primitive, PrimitiveKind, StrokeStyle,
};
use quill_pen::{PenAdapter, PenSample, ToolType};
use quill_view::Transformation;
use tracing::{debug, warn};

use crate::gesture::Gesture;
use crate::{
    CanvasConfig, CanvasError, ConfigError, DocumentSnapshot, InputPhase, Paper, PrimitiveId,
    Selection, Tool,
};

const DEFAULT_ERASER_RADIUS: f64 = 4.0;

/// A drawing canvas: one document seen through one view.
#[derive(Debug)]
pub struct Canvas {
    transform: Transformation,
    primitives: Vec<(PrimitiveId, Primitive)>,
    next_id: u64,
    revision: u64,
    pending: Option<Primitive>,
    style: StrokeStyle,
    tool: Tool,
    active_tool: Option<Tool>,
    gesture: Gesture,
    eraser_radius: f64,
    paper: Paper,
    selection: Selection,
}

impl Canvas {
    /// Creates an empty canvas with the identity view over `view_rect`.
    pub fn new(view_rect: Rect) -> Self {
        Self {
            transform: Transformation::new(view_rect),
            primitives: Vec::new(),
            next_id: 1,
            revision: 0,
            pending: None,
            style: StrokeStyle::default(),
            tool: Tool::default(),
            active_tool: None,
            gesture: Gesture::default(),
            eraser_radius: DEFAULT_ERASER_RADIUS,
            paper: Paper::default(),
            selection: Selection::new(),
        }
    }

    /// Creates an empty canvas from a configuration.
    pub fn with_config(config: &CanvasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut canvas = Self::new(config.view_rect()?);
        canvas
            .transform
            .set_zoom_limits(config.min_zoom, config.max_zoom);
        canvas.style = config.style()?;
        canvas.tool = config.tool;
        canvas.paper = config.paper()?;
        canvas.eraser_radius = config.eraser_radius;
        debug!(?config, "canvas configured");
        Ok(canvas)
    }

    /// The current view.
    pub fn transform(&self) -> &Transformation {
        &self.transform
    }

    /// Resizes the view.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.transform.set_view_rect(rect);
    }

    /// Pans the view by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.transform.pan_by_screen(delta);
        debug!(offset = ?self.transform.offset(), "panned");
    }

    /// Zooms the view by `factor` about a screen point.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        self.transform.zoom_about_screen_point(anchor, factor);
        debug!(scale = self.transform.scale(), "zoomed");
    }

    /// Style used for new strokes.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Sets the style used for new strokes.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Tool used when no pen button is held.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Selects the tool used when no pen button is held.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// The paper background.
    pub fn paper(&self) -> Paper {
        self.paper
    }

    /// Changes the paper background.
    pub fn set_paper(&mut self, paper: Paper) {
        if self.paper != paper {
            self.paper = paper;
            self.bump_revision();
        }
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Document revision; bumps on every committed change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of committed primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` if nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// A committed primitive.
    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.index_of(id).map(|i| &self.primitives[i].1)
    }

    /// Committed primitives in z-order.
    pub fn primitives(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> + '_ {
        self.primitives.iter().map(|(id, p)| (*id, p))
    }

    /// The stroke in progress, if any.
    pub fn pending(&self) -> Option<&Primitive> {
        self.pending.as_ref()
    }

    /// Starts a stroke at a screen position.
    ///
    /// A stroke already in progress is dropped.
    pub fn begin_stroke(&mut self, kind: PrimitiveKind, screen: Point) -> Result<(), CanvasError> {
        let t = &self.transform;
        let stroke: Primitive = match kind {
            PrimitiveKind::Line => GraphicsLine::new(screen, self.style, t)?.into(),
            PrimitiveKind::Stroke => FreehandStroke::new(screen, self.style, t)?.into(),
        };
        if self.pending.replace(stroke).is_some() {
            debug!("replaced an uncommitted stroke");
        }
        debug!(?kind, ?screen, "stroke started");
        Ok(())
    }

    /// Continues the stroke in progress to a screen position.
    ///
    /// Lines move their end point; freehand strokes append a sample.
    pub fn extend_stroke(&mut self, screen: Point) -> Result<(), CanvasError> {
        let t = &self.transform;
        match self.pending.as_mut() {
            None => Err(CanvasError::NoStrokeInProgress),
            Some(Primitive::Line(line)) => Ok(line.set_end_screen(screen, t)?),
            Some(Primitive::Stroke(stroke)) => {
                stroke.extend_screen(screen, t)?;
                Ok(())
            }
        }
    }

    /// Adds the stroke in progress to the document.
    pub fn commit_stroke(&mut self) -> Result<PrimitiveId, CanvasError> {
        let stroke = self.pending.take().ok_or(CanvasError::NoStrokeInProgress)?;
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        debug!(%id, kind = ?stroke.kind(), points = stroke.controlpoints().len(), "stroke committed");
        self.primitives.push((id, stroke));
        self.bump_revision();
        Ok(id)
    }

    /// Drops the stroke in progress. Returns `false` if there was none.
    pub fn cancel_stroke(&mut self) -> bool {
        let dropped = self.pending.take().is_some();
        if dropped {
            debug!("stroke cancelled");
        }
        dropped
    }

    /// Committed primitives whose stroke reaches the view, in z-order.
    ///
    /// Bounds are checked first; the exact test then runs against the view
    /// grown by the primitive's inset, so a thick stroke whose centerline
    /// sits just outside the view is still drawn.
    pub fn visible(&self) -> Vec<PrimitiveId> {
        let view = self.transform.view_rect();
        let visible: Vec<_> = self
            .primitives
            .iter()
            .filter(|(_, p)| self.reaches(p, view))
            .map(|(id, _)| *id)
            .collect();
        debug!(
            visible = visible.len(),
            culled = self.primitives.len() - visible.len(),
            "culled"
        );
        visible
    }

    /// Replaces the selection with the primitives whose centerline touches
    /// `screen_rect`.
    pub fn select_in_rect(&mut self, screen_rect: Rect) -> &[PrimitiveId] {
        let hits = self.query_rect(screen_rect);
        self.selection.replace_with(hits);
        debug!(selected = self.selection.len(), "selected");
        self.selection.items()
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Removes the primitives whose centerline touches `screen_rect`.
    ///
    /// Returns the removed ids in z-order.
    pub fn erase_in_rect(&mut self, screen_rect: Rect) -> Vec<PrimitiveId> {
        let hits = self.query_rect(screen_rect);
        if hits.is_empty() {
            return hits;
        }
        self.primitives.retain(|(id, _)| !hits.contains(id));
        for id in &hits {
            self.selection.remove(*id);
        }
        self.bump_revision();
        debug!(erased = hits.len(), "erased");
        hits
    }

    /// Removes one primitive.
    pub fn remove(&mut self, id: PrimitiveId) -> Result<Primitive, CanvasError> {
        let index = self.index_of(id).ok_or(CanvasError::UnknownPrimitive(id))?;
        let (_, removed) = self.primitives.remove(index);
        self.selection.remove(id);
        self.bump_revision();
        Ok(removed)
    }

    /// The primitive closest to a screen point within `tolerance` pixels of
    /// its stroke. Ties go to the topmost.
    pub fn pick_at(&self, screen_pt: Point, tolerance: f64) -> Option<PrimitiveId> {
        if !is_finite_point(screen_pt) {
            return None;
        }
        let t = &self.transform;
        let probe = Rect::from_points(screen_pt, screen_pt).inflate(tolerance, tolerance);
        let mut best: Option<(PrimitiveId, f64)> = None;
        for (id, p) in self.primitives.iter().rev() {
            if !bounds_overlap(p.bounding_box(t), probe) {
                continue;
            }
            if let Some(dist) = p.hit_test(screen_pt, tolerance, t)
                && best.is_none_or(|(_, d)| dist < d)
            {
                best = Some((*id, dist));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Moves a control point of a committed primitive to a document position.
    pub fn move_controlpoint(
        &mut self,
        id: PrimitiveId,
        index: usize,
        doc: Point,
    ) -> Result<(), CanvasError> {
        self.primitive_mut(id)?.move_controlpoint(index, doc)?;
        self.bump_revision();
        Ok(())
    }

    /// Restyles a committed primitive.
    pub fn set_style_of(&mut self, id: PrimitiveId, style: StrokeStyle) -> Result<(), CanvasError> {
        self.primitive_mut(id)?.set_style(style);
        self.bump_revision();
        Ok(())
    }

    /// Draws the visible committed primitives, clipped to the view.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let clip = self.transform.view_rect();
        for id in self.visible() {
            if let Some(p) = self.get(id) {
                p.draw(surface, clip, &self.transform);
            }
        }
    }

    /// Draws the stroke in progress, if any.
    pub fn draw_pending(&self, surface: &mut dyn Surface) {
        if let Some(p) = &self.pending {
            p.draw(surface, self.transform.view_rect(), &self.transform);
        }
    }

    /// Copies the committed document for use off the UI thread.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            revision: self.revision,
            paper: self.paper.kind,
            primitives: self
                .primitives
                .iter()
                .map(|(id, p)| (*id, p.snapshot()))
                .collect(),
        }
    }

    /// Routes one platform sample through the active tool.
    ///
    /// The tool is picked on [`InputPhase::Down`]: the pen button or an
    /// eraser tip selects the eraser and the alternate button the selection
    /// rectangle; otherwise the canvas tool applies. An eraser tip only counts
    /// when the adapter reports it as a pen event. Samples with non-finite positions are logged and
    /// dropped, as are moves with no preceding down.
    pub fn handle_input(
        &mut self,
        adapter: &dyn PenAdapter,
        phase: InputPhase,
        sample: &PenSample,
    ) -> Result<(), CanvasError> {
        let pos = sample.position;
        if !is_finite_point(pos) && phase != InputPhase::Cancel {
            warn!(?pos, ?phase, "dropping sample with non-finite position");
            return Ok(());
        }
        match phase {
            InputPhase::Down => {
                let tool = self.tool_for(adapter, sample);
                self.active_tool = Some(tool);
                match tool {
                    Tool::Line => self.begin_stroke(PrimitiveKind::Line, pos)?,
                    Tool::Freehand => self.begin_stroke(PrimitiveKind::Stroke, pos)?,
                    Tool::Eraser => {
                        self.gesture.start(pos);
                        self.erase_in_rect(self.eraser_rect(pos, pos));
                    }
                    Tool::Select => self.gesture.start(pos),
                }
            }
            InputPhase::Move => match self.active_tool {
                None => debug!("move without a preceding down"),
                Some(Tool::Line | Tool::Freehand) => self.extend_stroke(pos)?,
                Some(Tool::Eraser) => {
                    if let Some(swept) = self.gesture.update(pos) {
                        self.erase_in_rect(self.eraser_rect(swept.p0, swept.p1));
                    }
                }
                Some(Tool::Select) => {
                    self.gesture.update(pos);
                }
            },
            InputPhase::Up => match self.active_tool.take() {
                None => debug!("up without a preceding down"),
                Some(Tool::Line | Tool::Freehand) => {
                    self.extend_stroke(pos)?;
                    self.commit_stroke()?;
                }
                Some(Tool::Eraser) => {
                    if let Some(swept) = self.gesture.update(pos) {
                        self.erase_in_rect(self.eraser_rect(swept.p0, swept.p1));
                    }
                    self.gesture.end();
                }
                Some(Tool::Select) => {
                    if let Some(rect) = self.gesture.extent(pos) {
                        self.select_in_rect(rect);
                    }
                    self.gesture.end();
                }
            },
            InputPhase::Cancel => {
                self.active_tool = None;
                self.cancel_stroke();
                self.gesture.end();
            }
        }
        Ok(())
    }

    /// Whether a rectangle gesture is in progress.
    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_active()
    }

    fn tool_for(&self, adapter: &dyn PenAdapter, sample: &PenSample) -> Tool {
        if adapter.is_pen_event(sample) {
            if sample.tool == ToolType::Eraser || adapter.is_pen_button_pressed(sample) {
                return Tool::Eraser;
            }
            if adapter.is_pen_button_alt_pressed(sample) {
                return Tool::Select;
            }
        }
        self.tool
    }

    fn eraser_rect(&self, a: Point, b: Point) -> Rect {
        let r = self.eraser_radius;
        Rect::from_points(a, b).inflate(r, r)
    }

    fn reaches(&self, p: &Primitive, view: Rect) -> bool {
        let t = &self.transform;
        if !bounds_overlap(p.bounding_box(t), view) {
            return false;
        }
        let inset = p.bounding_box_inset(t);
        p.intersects(view.inflate(inset, inset), t)
    }

    fn query_rect(&self, screen_rect: Rect) -> Vec<PrimitiveId> {
        let t = &self.transform;
        self.primitives
            .iter()
            .filter(|(_, p)| {
                bounds_overlap(p.bounding_box(t), screen_rect) && p.intersects(screen_rect, t)
            })
            .map(|(id, _)| *id)
            .collect()
    }

    fn index_of(&self, id: PrimitiveId) -> Option<usize> {
        self.primitives
            .binary_search_by_key(&id, |(id, _)| *id)
            .ok()
    }

    fn primitive_mut(&mut self, id: PrimitiveId) -> Result<&mut Primitive, CanvasError> {
        let index = self.index_of(id).ok_or(CanvasError::UnknownPrimitive(id))?;
        Ok(&mut self.primitives[index].1)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;
use std::time::Duration;

use annals_camera::{
    AnimationTicket, CameraTransform, ControllerOptions, TickOutcome, ViewportController,
    ZoomLimits,
};
use annals_projection::{Margins, Projection, TimelineConfig};
use annals_records::{
    DynastyRecord, DynastyRulers, PoetRecord, RulerRecord, filter_by_query, merge_dynasty_rulers,
    position_by_name,
};
use annals_scene::{HotspotTarget, Interest, LayerKind, Scene, SceneOptions, SceneRecords};
use kurbo::{Point, Size};

use crate::error::TimelineError;
use crate::input::InputEvent;
use crate::logging::{debug, trace, warn};
use crate::tooltip::{Tooltip, TooltipContent, TooltipManager, TooltipMetrics};

/// Everything a provider supplies to build a timeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Dataset {
    /// Dynasty bands.
    pub dynasties: Vec<DynastyRecord>,
    /// Per-dynasty ruler lists, merged chronologically on load.
    pub rulers: Vec<DynastyRulers>,
    /// Poets in provider order.
    pub poets: Vec<PoetRecord>,
}

/// Knobs for a [`Timeline`].
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineOptions {
    /// First year on the axis.
    pub min_year: i32,
    /// Last year on the axis.
    pub max_year: i32,
    /// Content margins.
    pub margins: Margins,
    /// Width of a poet bar.
    pub poet_bar_width: f64,
    /// Gap between poet columns.
    pub poet_bar_spacing: f64,
    /// Styles, palette, columns, and initial visibility.
    pub scene: SceneOptions,
    /// Wheel and button zoom factors.
    pub controller: ControllerOptions,
    /// Camera scale bounds.
    pub zoom_limits: ZoomLimits,
    /// Tooltip sizing.
    pub tooltip: TooltipMetrics,
    /// Length of the glide started by [`Timeline::animate_to_poet`].
    pub navigation_duration: Duration,
}

impl TimelineOptions {
    /// Sets the year range.
    #[must_use]
    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Sets the scene options.
    #[must_use]
    pub fn with_scene(mut self, scene: SceneOptions) -> Self {
        self.scene = scene;
        self
    }

    /// Sets the navigation glide length.
    #[must_use]
    pub fn with_navigation_duration(mut self, duration: Duration) -> Self {
        self.navigation_duration = duration;
        self
    }

    /// The content config for a viewport of `viewport`.
    #[must_use]
    pub fn config_for(&self, viewport: Size) -> TimelineConfig {
        TimelineConfig::for_viewport(viewport)
            .with_year_range(self.min_year, self.max_year)
            .with_margins(self.margins)
            .with_poet_bars(self.poet_bar_width, self.poet_bar_spacing)
    }
}

impl Default for TimelineOptions {
    fn default() -> Self {
        let config = TimelineConfig::default();
        Self {
            min_year: config.min_year,
            max_year: config.max_year,
            margins: config.margins,
            poet_bar_width: config.poet_bar_width,
            poet_bar_spacing: config.poet_bar_spacing,
            scene: SceneOptions::default(),
            controller: ControllerOptions::default(),
            zoom_limits: ZoomLimits::default(),
            tooltip: TooltipMetrics::default(),
            navigation_duration: Duration::from_millis(1000),
        }
    }
}

/// Something the host may want to react to.
///
/// A ruler stops being hovered when the pointer moves off it, leaves the
/// view, or when the camera or the ruler layer changes under a resting
/// pointer.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineEvent {
    /// The pointer entered a ruler block; a tooltip is now showing.
    RulerHoverEnter {
        /// Index into [`Scene::rulers`].
        ruler: usize,
        /// The hovered ruler.
        record: RulerRecord,
        /// Pointer position in screen space.
        screen: Point,
    },
    /// The pointer left a ruler block; its tooltip is gone.
    ///
    /// The record is still available through [`Scene::ruler`].
    RulerHoverLeave {
        /// Index into [`Scene::rulers`].
        ruler: usize,
    },
    /// A poet bar was pressed.
    PoetSelected {
        /// Index into [`Scene::poets`] (birth order).
        poet: usize,
        /// The selected poet.
        record: PoetRecord,
    },
}

/// A complete interactive timeline: scene, camera, and tooltip.
///
/// The timeline is driven entirely by the host: feed it [`InputEvent`]s,
/// call [`tick`](Self::tick) each frame while a glide is running, and paint
/// [`scene`](Self::scene) under [`camera`](Self::camera).
///
/// Host controls that move the camera re-check what lies under the last
/// known pointer position. Hover changes found that way are queued and
/// returned by the next [`handle`](Self::handle) or by
/// [`take_events`](Self::take_events).
#[derive(Clone, Debug)]
pub struct Timeline {
    options: TimelineOptions,
    poets: Vec<PoetRecord>,
    scene: Scene,
    controller: ViewportController,
    tooltips: TooltipManager,
    hovered_ruler: Option<usize>,
    pointer: Option<Point>,
    pending: Vec<TimelineEvent>,
}

impl Timeline {
    /// Builds a timeline for a view of `viewport`, centered on the content.
    pub fn new(
        dataset: Dataset,
        viewport: Size,
        options: TimelineOptions,
    ) -> Result<Self, TimelineError> {
        let projection = Projection::new(options.config_for(viewport))?;
        let rulers = merge_dynasty_rulers(&dataset.rulers);
        debug!(
            dynasties = dataset.dynasties.len(),
            rulers = rulers.len(),
            poets = dataset.poets.len(),
            "building timeline"
        );
        let records = SceneRecords {
            dynasties: dataset.dynasties,
            rulers,
            poets: dataset.poets.clone(),
        };
        let scene = Scene::new(projection, records, options.scene.clone());
        let mut controller = ViewportController::new(viewport)
            .with_limits(options.zoom_limits)
            .with_options(options.controller);
        controller.reset_view(projection.content_center());
        let tooltips = TooltipManager::new(viewport, options.tooltip);
        Ok(Self {
            options,
            poets: dataset.poets,
            scene,
            controller,
            tooltips,
            hovered_ruler: None,
            pointer: None,
            pending: Vec::new(),
        })
    }

    /// Applies one input event, returning what the host should know about.
    ///
    /// A resize that cannot produce a valid config is logged and ignored; use
    /// [`resize`](Self::resize) to observe the error.
    pub fn handle(&mut self, event: InputEvent) -> Vec<TimelineEvent> {
        let mut events = core::mem::take(&mut self.pending);
        match event {
            InputEvent::PointerDown(pt) => {
                self.pointer = Some(pt);
                let content = self.controller.screen_to_content(pt);
                let selected = match self.scene.hit_test(content, Interest::CLICK) {
                    Some(HotspotTarget::Poet(poet)) => {
                        self.scene.poet(poet).map(|record| (poet, record.clone()))
                    }
                    _ => None,
                };
                if let Some((poet, record)) = selected {
                    debug!(poet, name = %record.name, "poet selected");
                    events.push(TimelineEvent::PoetSelected { poet, record });
                }
                self.controller.pointer_down(pt);
            }
            InputEvent::PointerMove(pt) => {
                self.pointer = Some(pt);
                self.controller.pointer_move(pt);
                self.update_hover(pt, &mut events);
            }
            InputEvent::PointerUp => self.controller.pointer_up(),
            InputEvent::PointerLeave => {
                self.pointer = None;
                self.controller.pointer_leave();
                self.clear_hover(&mut events);
            }
            InputEvent::Wheel { position, delta_y } => {
                self.pointer = Some(position);
                if self.controller.wheel(position, delta_y) {
                    trace!(scale = self.controller.camera().scale, "wheel zoom");
                }
                self.update_hover(position, &mut events);
            }
            InputEvent::Resize(size) => {
                if let Err(_err) = self.resize(size) {
                    warn!(
                        error = %_err,
                        width = size.width,
                        height = size.height,
                        "resize ignored"
                    );
                }
            }
        }
        events.append(&mut self.pending);
        events
    }

    /// Drains hover changes caused by host controls since the last
    /// [`handle`](Self::handle).
    pub fn take_events(&mut self) -> Vec<TimelineEvent> {
        core::mem::take(&mut self.pending)
    }

    /// Re-checks the hover under the last pointer position after the camera
    /// or a layer changed.
    fn refresh_hover(&mut self) {
        let mut pending = core::mem::take(&mut self.pending);
        match self.pointer {
            Some(pt) => self.update_hover(pt, &mut pending),
            None => self.clear_hover(&mut pending),
        }
        self.pending = pending;
    }

    fn update_hover(&mut self, pt: Point, events: &mut Vec<TimelineEvent>) {
        let content = self.controller.screen_to_content(pt);
        let hit = match self.scene.hit_test(content, Interest::HOVER) {
            Some(HotspotTarget::Ruler(ruler)) => Some(ruler),
            _ => None,
        };
        if hit == self.hovered_ruler {
            return;
        }
        self.clear_hover(events);
        let Some(ruler) = hit else {
            return;
        };
        let Some(record) = self.scene.ruler(ruler) else {
            return;
        };
        self.tooltips.show(TooltipContent::for_ruler(record), pt);
        self.hovered_ruler = Some(ruler);
        events.push(TimelineEvent::RulerHoverEnter {
            ruler,
            record: record.clone(),
            screen: pt,
        });
    }

    fn clear_hover(&mut self, events: &mut Vec<TimelineEvent>) {
        if let Some(ruler) = self.hovered_ruler.take() {
            self.tooltips.hide();
            events.push(TimelineEvent::RulerHoverLeave { ruler });
        }
    }

    /// Re-derives the content config for a new viewport and re-renders.
    ///
    /// On error nothing changes: the previous scene, camera, and tooltip
    /// stay in place.
    pub fn resize(&mut self, viewport: Size) -> Result<(), TimelineError> {
        let projection = Projection::new(self.options.config_for(viewport))?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "resizing timeline"
        );
        self.scene.set_projection(projection);
        self.controller.set_view_size(viewport);
        self.tooltips.set_viewport(viewport);
        self.refresh_hover();
        Ok(())
    }

    /// Starts a glide to the first poet (in provider order) whose name
    /// contains `name`.
    ///
    /// The glide targets that exact poet even when others share its name.
    ///
    /// `now` is the host's monotonic clock; pass the same clock to
    /// [`tick`](Self::tick).
    pub fn animate_to_poet(
        &mut self,
        name: &str,
        now: Duration,
    ) -> Result<AnimationTicket, TimelineError> {
        let not_found = || TimelineError::PoetNotFound {
            query: name.to_owned(),
        };
        let Some(input) = position_by_name(&self.poets, name) else {
            warn!(name, "no poet to navigate to");
            return Err(not_found());
        };
        let target = self
            .scene
            .birth_index(input)
            .and_then(|index| self.scene.poet_anchor_at(index))
            .ok_or_else(not_found)?;
        debug!(
            poet = %self.poets[input].name,
            x = target.x,
            y = target.y,
            "navigating to poet"
        );
        Ok(self
            .controller
            .animate_to(target, now, self.options.navigation_duration))
    }

    /// Advances the glide owned by `ticket`.
    pub fn tick(&mut self, ticket: AnimationTicket, now: Duration) -> TickOutcome {
        let outcome = self.controller.tick(ticket, now);
        match outcome {
            TickOutcome::Stale => {
                trace!(epoch = ticket.epoch(), "stale animation tick");
                return outcome;
            }
            TickOutcome::Finished => {
                debug!("navigation finished");
            }
            TickOutcome::Running => {}
        }
        self.refresh_hover();
        outcome
    }

    /// Poets whose name, dynasty, or category contains `query`, in provider
    /// order. A blank query returns every poet without copying.
    #[must_use]
    pub fn search(&self, query: &str) -> Cow<'_, [PoetRecord]> {
        filter_by_query(&self.poets, query)
    }

    /// Shows or hides a layer. Returns `true` if anything changed.
    pub fn set_layer_visible(&mut self, kind: LayerKind, visible: bool) -> bool {
        let changed = self.scene.set_visibility(kind, visible);
        if changed {
            debug!(?kind, visible, "layer visibility changed");
            self.refresh_hover();
        }
        changed
    }

    /// Zooms in one button step about the view center.
    pub fn zoom_in(&mut self) -> bool {
        let changed = self.controller.zoom_in();
        if changed {
            self.refresh_hover();
        }
        changed
    }

    /// Zooms out one button step about the view center.
    pub fn zoom_out(&mut self) -> bool {
        let changed = self.controller.zoom_out();
        if changed {
            self.refresh_hover();
        }
        changed
    }

    /// Restores the default scale and centers the content.
    pub fn reset_view(&mut self) {
        let center = self.scene.projection().content_center();
        self.controller.reset_view(center);
        self.refresh_hover();
    }

    /// The camera to paint the scene under.
    #[must_use]
    pub fn camera(&self) -> CameraTransform {
        self.controller.camera()
    }

    /// Returns `true` while a navigation glide is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// The rendered layers and records.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The visible tooltip, in screen space.
    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltips.current()
    }

    /// Options the timeline was built with.
    #[must_use]
    pub fn options(&self) -> &TimelineOptions {
        &self.options
    }
}

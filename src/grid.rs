//! Tearable cloth grid: topology, relaxation and integration.

use crate::config::{BoundsMode, ClothConfig, GridConfig, Viewport};
use crate::error::ClothError;
use crate::float::Float;
use crate::interaction::PointerState;
use crate::link::{Link, LinkId, Resolution};
use crate::observer::StepObserver;
use crate::point::{Interaction, Point};
use crate::render::RenderSink;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A rectangular cloth of `(rows + 1) x (cols + 1)` points.
///
/// Points live in a flat arena indexed `col + row * (cols + 1)`. Links live
/// in a second arena and are referenced by [`LinkId`] from the link
/// collection of the point that created them. A link leaves that collection
/// when it tears or its owner is cut, and is never added back.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothGrid<F: Float> {
    points: AllocVec<Point<F>>,
    links: AllocVec<Link<F>>,
    cols: usize,
    rows: usize,
    spacing: F,
    config: ClothConfig<F>,
    viewport: Viewport<F>,
}

impl<F: Float> ClothGrid<F> {
    /// Build the cloth centered horizontally in `viewport`, top row at
    /// `grid.start_y` and pinned in place.
    ///
    /// Each point links to its left neighbour, then to the point above.
    pub fn new(
        grid: &GridConfig<F>,
        config: ClothConfig<F>,
        viewport: Viewport<F>,
    ) -> Result<Self, ClothError> {
        grid.validate()?;
        config.validate()?;
        viewport.validate()?;
        check_tear_distance(&config, grid.spacing)?;

        let across = grid.cols + 1;
        let down = grid.rows + 1;
        let spacing = grid.spacing;
        let start_x = viewport.width * F::half() - F::from_usize(grid.cols) * spacing * F::half();

        let mut cloth = ClothGrid {
            points: AllocVec::with_capacity(across * down),
            links: AllocVec::with_capacity(across * grid.rows + down * grid.cols),
            cols: grid.cols,
            rows: grid.rows,
            spacing,
            config,
            viewport,
        };

        for y in 0..down {
            for x in 0..across {
                let pos = Vec2::new(
                    start_x + F::from_usize(x) * spacing,
                    grid.start_y + F::from_usize(y) * spacing,
                );
                let mut point = Point::new(pos);
                if y == 0 {
                    point.pin(pos);
                }
                let index = cloth.points.len();
                cloth.points.push(point);

                if x != 0 {
                    cloth.attach(index, index - 1);
                }
                if y != 0 {
                    cloth.attach(index, x + (y - 1) * across);
                }
            }
        }

        log::debug!(
            "built cloth grid: {} points, {} links, spacing {:?}",
            cloth.points.len(),
            cloth.links.len(),
            spacing
        );
        Ok(cloth)
    }

    /// Create a link owned by `from` pointing at `to`, resting at the grid spacing.
    fn attach(&mut self, from: usize, to: usize) -> LinkId {
        let id = LinkId(self.links.len());
        self.links.push(Link::new(id, from, to, self.spacing));
        self.points[from].attach(id);
        id
    }

    /// One simulation step: relax all links `iterations` times, then
    /// integrate every point with `delta²`.
    pub fn step<O: StepObserver>(&mut self, delta: F, pointer: &PointerState<F>, observer: &mut O) {
        for i in 0..self.config.iterations {
            for index in 0..self.points.len() {
                self.resolve_point(index, observer);
            }
            observer.on_relax_iteration(i);
        }

        let dt2 = delta * delta;
        for index in 0..self.points.len() {
            match self.points[index].integrate(dt2, &self.config, pointer, &self.viewport) {
                Interaction::Cut(removed) if removed > 0 => {
                    log::debug!("pointer cut point {} ({} links)", index, removed);
                    observer.on_point_cut(index, removed);
                }
                _ => {}
            }
        }
        observer.on_integrate();

        log::trace!("step complete: delta {:?}, {} links remain", delta, self.link_count());
        observer.on_step_complete();
    }

    /// Snap a pinned point to its pin, or resolve each link it owns in order.
    pub fn resolve_point<O: StepObserver>(&mut self, index: usize, observer: &mut O) {
        if self.points[index].snap_to_pin() {
            return;
        }

        let mut slot = 0;
        while slot < self.points[index].links().len() {
            let link = self.links[self.points[index].links()[slot].index()];
            match link.resolve(&mut self.points, &self.config) {
                // Removed from this collection; the next link now sits in `slot`.
                Resolution::Torn => {
                    log::debug!("link {:?} torn between points {} and {}", link.id, link.p1, link.p2);
                    observer.on_link_torn(link.id);
                }
                _ => slot += 1,
            }
        }

        if self.config.bounds_mode == BoundsMode::Mirror {
            self.points[index].mirror_within(&self.viewport);
        }
    }

    /// Hand every remaining link to `sink` as one batch.
    pub fn draw<S: RenderSink<F>>(&self, sink: &mut S) {
        sink.begin();
        for point in &self.points {
            for &id in point.links() {
                self.links[id.index()].draw(&self.points, sink);
            }
        }
        sink.end();
    }

    /// Clear every link owned by the point at `index`, as a pointer cut would.
    pub fn cut_at(&mut self, index: usize) -> Result<usize, ClothError> {
        let count = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(ClothError::PointOutOfBounds { index, count })?;
        Ok(point.cut())
    }

    /// Pin the point at `index` to `target`.
    pub fn pin(&mut self, index: usize, target: Vec2<F>) -> Result<(), ClothError> {
        let count = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(ClothError::PointOutOfBounds { index, count })?;
        point.pin(target);
        Ok(())
    }

    /// Add `force` to every free point's accumulator for the next step.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        for p in self.points.iter_mut().filter(|p| !p.is_pinned()) {
            p.apply_force(force);
        }
    }

    pub fn set_config(&mut self, config: ClothConfig<F>) -> Result<(), ClothError> {
        config.validate()?;
        check_tear_distance(&config, self.spacing)?;
        log::debug!("cloth config replaced: {:?}", config);
        self.config = config;
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport<F>) -> Result<(), ClothError> {
        viewport.validate()?;
        self.viewport = viewport;
        Ok(())
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        col + row * (self.cols + 1)
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.points[self.index(col, row)].pos
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    pub fn point(&self, index: usize) -> &Point<F> { &self.points[index] }
    pub fn point_mut(&mut self, index: usize) -> &mut Point<F> { &mut self.points[index] }
    pub fn points(&self) -> &[Point<F>] { &self.points }
    pub fn link(&self, id: LinkId) -> &Link<F> { &self.links[id.index()] }

    /// Links still held by the point at `index`.
    pub fn links_of(&self, index: usize) -> impl Iterator<Item = &Link<F>> + '_ {
        self.points[index].links().iter().map(move |id| &self.links[id.index()])
    }

    /// Links that have not torn or been cut.
    pub fn active_links(&self) -> impl Iterator<Item = &Link<F>> + '_ {
        self.points
            .iter()
            .flat_map(move |p| p.links().iter().map(move |id| &self.links[id.index()]))
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn spacing(&self) -> F { self.spacing }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn viewport(&self) -> &Viewport<F> { &self.viewport }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn link_count(&self) -> usize { self.points.iter().map(|p| p.links().len()).sum() }
}

/// Links start at `spacing`, and one at rest never tears, so a tear distance
/// at or below it would leave the cloth untearable.
fn check_tear_distance<F: Float>(config: &ClothConfig<F>, spacing: F) -> Result<(), ClothError> {
    if config.tear_distance > spacing {
        Ok(())
    } else {
        Err(ClothError::InvalidParameter { name: "tear_distance" })
    }
}

//! Mass points: Verlet integration, pointer response and bounds.

use crate::config::{BoundsMode, ClothConfig, Viewport};
use crate::float::Float;
use crate::interaction::{PointerButton, PointerState};
use crate::link::LinkId;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// What the pointer did to a point during integration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    None,
    Dragged,
    /// The point's links were cleared; carries how many were removed.
    Cut(usize),
}

/// A Verlet point mass with implicit velocity `pos - prev_pos`.
///
/// `links` holds the links this point owns, in the order they are resolved
/// and drawn.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub force: Vec2<F>,
    pin: Option<Vec2<F>>,
    links: AllocVec<LinkId>,
}

impl<F: Float> Point<F> {
    pub fn new(pos: Vec2<F>) -> Self {
        Point {
            pos,
            prev_pos: pos,
            force: Vec2::zero(),
            pin: None,
            links: AllocVec::new(),
        }
    }

    /// Lock the point to `target`. Dynamics are ignored from now on.
    pub fn pin(&mut self, target: Vec2<F>) {
        self.pin = Some(target);
    }

    pub fn pin_target(&self) -> Option<Vec2<F>> {
        self.pin
    }

    pub fn is_pinned(&self) -> bool {
        self.pin.is_some()
    }

    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    pub(crate) fn attach(&mut self, link: LinkId) {
        self.links.push(link);
    }

    /// Remove `link` from this point's collection. Absent links are ignored.
    pub fn detach(&mut self, link: LinkId) -> bool {
        match self.links.iter().position(|&l| l == link) {
            Some(slot) => {
                self.links.remove(slot);
                true
            }
            None => false,
        }
    }

    /// Drop every link this point owns; returns how many were removed.
    pub fn cut(&mut self) -> usize {
        let removed = self.links.len();
        self.links.clear();
        removed
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.force += force;
    }

    /// If pinned, move onto the pin target and report `true`.
    pub fn snap_to_pin(&mut self) -> bool {
        match self.pin {
            Some(target) => {
                self.pos = target;
                true
            }
            None => false,
        }
    }

    /// One Verlet step with the squared timestep `dt2`.
    pub fn integrate(
        &mut self,
        dt2: F,
        config: &ClothConfig<F>,
        pointer: &PointerState<F>,
        viewport: &Viewport<F>,
    ) -> Interaction {
        if self.is_pinned() {
            self.force = Vec2::zero();
            return Interaction::None;
        }

        let interaction = self.interact(config, pointer);

        self.apply_force(config.gravity);
        if let Some(resolution) = config.force_resolution {
            self.force = self.force.quantize(resolution);
        }

        let velocity = (self.pos - self.prev_pos).scale(config.damping);
        let next = self.pos + velocity + self.force.scale(dt2);
        self.prev_pos = self.pos;
        self.pos = next;
        self.force = Vec2::zero();

        if config.bounds_mode == BoundsMode::Bounce {
            self.bounce_within(viewport, config.bounce);
        }

        interaction
    }

    fn interact(&mut self, config: &ClothConfig<F>, pointer: &PointerState<F>) -> Interaction {
        if !pointer.down {
            return Interaction::None;
        }
        let dist = self.pos.distance(pointer.pos);
        match pointer.button {
            PointerButton::Primary if dist < config.influence_radius => {
                self.prev_pos = self.pos - pointer.motion().scale(config.drag_factor);
                Interaction::Dragged
            }
            PointerButton::Other if dist < config.cut_radius => Interaction::Cut(self.cut()),
            _ => Interaction::None,
        }
    }

    /// Clamp onto the viewport edge, reflecting `prev_pos` about it.
    pub fn bounce_within(&mut self, viewport: &Viewport<F>, bounce: F) {
        let (min, max) = (viewport.min(), viewport.max());
        bounce_axis(&mut self.pos.x, &mut self.prev_pos.x, min.x, max.x, bounce);
        bounce_axis(&mut self.pos.y, &mut self.prev_pos.y, min.y, max.y, bounce);
    }

    /// Mirror the position about any viewport edge it crossed.
    pub fn mirror_within(&mut self, viewport: &Viewport<F>) {
        let (min, max) = (viewport.min(), viewport.max());
        mirror_axis(&mut self.pos.x, min.x, max.x);
        mirror_axis(&mut self.pos.y, min.y, max.y);
    }
}

fn bounce_axis<F: Float>(pos: &mut F, prev: &mut F, min: F, max: F, bounce: F) {
    if *pos >= max {
        *prev = max + (max - *prev) * bounce;
        *pos = max;
    } else if *pos <= min {
        *prev = min + (min - *prev) * bounce;
        *pos = min;
    }
}

fn mirror_axis<F: Float>(pos: &mut F, min: F, max: F) {
    if *pos > max {
        *pos = F::two() * max - *pos;
    } else if *pos < min {
        *pos = F::two() * min - *pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport<f64> {
        Viewport::new(100.0, 100.0)
    }

    #[test]
    fn pinned_point_ignores_integration() {
        let mut p = Point::new(Vec2::new(5.0f64, 5.0));
        p.pin(Vec2::new(5.0, 5.0));
        p.apply_force(Vec2::new(1000.0, 1000.0));
        let config = ClothConfig::new();
        p.integrate(0.016 * 0.016, &config, &PointerState::idle(), &viewport());
        assert_eq!(p.pos, Vec2::new(5.0, 5.0));
        assert_eq!(p.force, Vec2::zero());
    }

    #[test]
    fn detach_missing_link_is_noop() {
        let mut p = Point::<f32>::new(Vec2::zero());
        p.attach(LinkId(3));
        assert!(!p.detach(LinkId(7)));
        assert_eq!(p.links(), &[LinkId(3)]);
        assert!(p.detach(LinkId(3)));
        assert!(p.links().is_empty());
    }

    #[test]
    fn bounce_reflects_previous_position_about_floor() {
        let mut p = Point::new(Vec2::new(50.0f64, 104.0));
        p.prev_pos = Vec2::new(50.0, 98.0);
        p.bounce_within(&viewport(), 0.5);
        assert_eq!(p.pos.y, 100.0);
        assert_eq!(p.prev_pos.y, 101.0);
        // Next step moves the point back up.
        assert!(p.pos.y - p.prev_pos.y < 0.0);
    }

    #[test]
    fn bounce_at_zero_edge() {
        let mut p = Point::new(Vec2::new(-2.0f64, 50.0));
        p.prev_pos = Vec2::new(4.0, 50.0);
        p.bounce_within(&viewport(), 0.5);
        assert_eq!(p.pos.x, 0.0);
        assert_eq!(p.prev_pos.x, -2.0);
    }

    #[test]
    fn mirror_reflects_position() {
        let mut p = Point::new(Vec2::new(103.0f64, -4.0));
        p.mirror_within(&viewport());
        assert_eq!(p.pos, Vec2::new(97.0, 4.0));
    }

    #[test]
    fn primary_drag_rewrites_previous_position() {
        let mut p = Point::new(Vec2::new(50.0f64, 50.0));
        let pointer = PointerState::held(
            PointerButton::Primary,
            Vec2::new(52.0, 50.0),
            Vec2::new(48.0, 50.0),
        );
        let config = ClothConfig::new().with_gravity(Vec2::zero()).with_damping(1.0);
        let outcome = p.integrate(0.0, &config, &pointer, &viewport());
        assert_eq!(outcome, Interaction::Dragged);
        // prev was set to 46, so the point carries +4 of velocity.
        assert_eq!(p.pos.x, 54.0);
    }

    #[test]
    fn secondary_button_cuts_within_radius_only() {
        let config = ClothConfig::<f64>::new();
        let pointer = PointerState::held(PointerButton::Other, Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0));

        let mut near = Point::new(Vec2::new(53.0, 50.0));
        near.attach(LinkId(0));
        near.attach(LinkId(1));
        let mut far = Point::new(Vec2::new(70.0, 50.0));
        far.attach(LinkId(2));

        assert_eq!(near.integrate(0.0, &config, &pointer, &viewport()), Interaction::Cut(2));
        assert_eq!(far.integrate(0.0, &config, &pointer, &viewport()), Interaction::None);
        assert!(near.links().is_empty());
        assert_eq!(far.links(), &[LinkId(2)]);
    }
}

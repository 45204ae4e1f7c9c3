//! 3D hover transforms for cards and floating cubes.

use crate::constants::{
    CARD_HOVER_LIFT_PX, CARD_HOVER_ROTATE_X_DEG, CARD_HOVER_SCALE, CUBE_DELAY_STEP_SEC,
    TILT_DIVISOR,
};
use crate::geometry::Rect;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub lift_px: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub scale: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        lift_px: 0.0,
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };

    pub const HOVER: Tilt = Tilt {
        lift_px: CARD_HOVER_LIFT_PX,
        rotate_x_deg: CARD_HOVER_ROTATE_X_DEG,
        rotate_y_deg: 0.0,
        scale: CARD_HOVER_SCALE,
    };

    pub fn css(&self) -> String {
        format!(
            "translateY({}px) rotateX({}deg) rotateY({}deg) scale({})",
            self.lift_px, self.rotate_x_deg, self.rotate_y_deg, self.scale
        )
    }
}

/// Hover tilt following the pointer; `pointer` is in the same (client)
/// coordinate space as `card`.
pub fn card_tilt(card: Rect, pointer: DVec2) -> Tilt {
    let local = pointer - card.origin();
    let half = DVec2::new(card.width / 2.0, card.height / 2.0);
    Tilt {
        rotate_x_deg: CARD_HOVER_ROTATE_X_DEG + (local.y - half.y) / TILT_DIVISOR,
        rotate_y_deg: (half.x - local.x) / TILT_DIVISOR,
        ..Tilt::HOVER
    }
}

pub const CUBE_HOVER_TRANSFORM: &str = "scale(1.3) rotateX(45deg) rotateY(45deg)";

/// Float animation delay for the cube at `index`, e.g. `"4s"`.
pub fn cube_animation_delay(index: usize) -> String {
    format!("{}s", index as f64 * CUBE_DELAY_STEP_SEC)
}

/// Transform inputs for one floating cube.
///
/// The transform is always rebuilt from hover state and the current parallax
/// offset, so repeated scroll events never accumulate translations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CubeState {
    pub hovered: bool,
    pub parallax_px: f64,
}

impl CubeState {
    pub fn transform(&self) -> String {
        let parallax = format!("translateY({}px)", self.parallax_px);
        if self.hovered {
            format!("{} {}", CUBE_HOVER_TRANSFORM, parallax)
        } else {
            parallax
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_pointer_keeps_base_tilt() {
        let card = Rect::new(100.0, 100.0, 300.0, 150.0);
        let t = card_tilt(card, card.center());
        assert_eq!(t.rotate_x_deg, CARD_HOVER_ROTATE_X_DEG);
        assert_eq!(t.rotate_y_deg, 0.0);
        assert_eq!(t.lift_px, CARD_HOVER_LIFT_PX);
    }

    #[test]
    fn corner_pointer_tilts_away() {
        let card = Rect::new(0.0, 0.0, 300.0, 150.0);
        let t = card_tilt(card, DVec2::new(0.0, 150.0));
        assert!((t.rotate_x_deg - (8.0 + 75.0 / 15.0)).abs() < 1e-9);
        assert!((t.rotate_y_deg - 10.0).abs() < 1e-9);
    }

    #[test]
    fn css_formats_whole_numbers_plainly() {
        assert_eq!(
            Tilt::NEUTRAL.css(),
            "translateY(0px) rotateX(0deg) rotateY(0deg) scale(1)"
        );
        assert_eq!(
            Tilt::HOVER.css(),
            "translateY(-12px) rotateX(8deg) rotateY(0deg) scale(1.02)"
        );
    }

    #[test]
    fn cube_transform_is_idempotent() {
        let mut cube = CubeState::default();
        cube.parallax_px = 30.0;
        let first = cube.transform();
        assert_eq!(first, cube.transform());
        cube.hovered = true;
        assert_eq!(
            cube.transform(),
            "scale(1.3) rotateX(45deg) rotateY(45deg) translateY(30px)"
        );
        assert_eq!(cube_animation_delay(2), "4s");
    }
}

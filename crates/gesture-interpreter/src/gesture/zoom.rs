use crate::GestureResult;
use crate::config::{GestureConfig, GestureKind};
use crate::gesture::GestureControl;
use crate::math::{Pos2, pinch_distance};

/// Two finger pinch. The change in distance between the
/// first two touches drives the scale of the target.
#[derive(Clone, Debug)]
pub(crate) struct ZoomGesture {
    last_pinch_distance: f32,
}

impl ZoomGesture {
    pub(crate) fn start(points: &[Pos2]) -> Option<Self> {
        Some(Self {
            last_pinch_distance: pinch_distance(points)?,
        })
    }
}

impl GestureControl for ZoomGesture {
    fn kind(&self) -> GestureKind {
        GestureKind::Zoom
    }

    fn last_pointer(&self) -> Option<Pos2> {
        None
    }

    fn last_pinch_distance(&self) -> Option<f32> {
        Some(self.last_pinch_distance)
    }

    fn update(
        &mut self,
        points: &[Pos2],
        config: &GestureConfig,
        scale: f64,
    ) -> Option<GestureResult> {
        let distance = pinch_distance(points)?;
        let delta = f64::from(distance - self.last_pinch_distance);
        self.last_pinch_distance = distance;

        zoomed_scale(config, scale, delta).map(|factor| GestureResult::Scale { factor })
    }
}

/// Scale after applying a zoom of `delta` to `scale`.
///
/// Returns [`None`] if the scale does not change, e.g. when
/// it is already at a bound and `delta` pushes further out,
/// or if `delta` is not a finite number.
pub(crate) fn zoomed_scale(config: &GestureConfig, scale: f64, delta: f64) -> Option<f64> {
    if !delta.is_finite() {
        return None;
    }

    let new_scale = config.clamp_scale(delta.mul_add(config.zoom_speed, scale));

    (new_scale != scale).then_some(new_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(distance: f32) -> [Pos2; 2] {
        [Pos2::new(0.0, 0.0), Pos2::new(distance, 0.0)]
    }

    #[test]
    fn start_needs_two_touches() {
        assert!(ZoomGesture::start(&[Pos2::new(0.0, 0.0)]).is_none());
        let gesture = ZoomGesture::start(&pair(50.0)).unwrap();
        assert_eq!(gesture.last_pinch_distance(), Some(50.0));
    }

    #[test]
    fn spreading_fingers_grows_scale() {
        let config = GestureConfig::default();
        let mut gesture = ZoomGesture::start(&pair(50.0)).unwrap();

        let result = gesture.update(&pair(80.0), &config, 0.1);

        let Some(GestureResult::Scale { factor }) = result else {
            panic!("expected a scale change, got {result:?}");
        };
        assert!((factor - 3.1).abs() < 1e-9);
        assert_eq!(gesture.last_pinch_distance(), Some(80.0));
    }

    #[test]
    fn degenerate_update_is_ignored() {
        let config = GestureConfig::default();
        let mut gesture = ZoomGesture::start(&pair(50.0)).unwrap();

        assert!(gesture.update(&[Pos2::new(3.0, 3.0)], &config, 1.0).is_none());
        assert_eq!(gesture.last_pinch_distance(), Some(50.0));
    }

    #[test]
    fn zoomed_scale_stops_at_bounds() {
        let config = GestureConfig::default();

        assert_eq!(zoomed_scale(&config, config.max_scale, 10.0), None);
        assert_eq!(zoomed_scale(&config, config.min_scale, -10.0), None);
        assert_eq!(
            zoomed_scale(&config, config.min_scale, 1000.0),
            Some(config.max_scale)
        );
    }

    #[test]
    fn zoomed_scale_ignores_non_finite_delta() {
        let config = GestureConfig::default();

        assert_eq!(zoomed_scale(&config, 1.0, f64::NAN), None);
        assert_eq!(zoomed_scale(&config, 1.0, f64::INFINITY), None);
        assert_eq!(zoomed_scale(&config, 1.0, f64::NEG_INFINITY), None);
    }

    #[test]
    fn non_finite_touch_keeps_baseline() {
        let config = GestureConfig::default();
        let mut gesture = ZoomGesture::start(&pair(50.0)).unwrap();

        let broken = [Pos2::new(0.0, 0.0), Pos2::new(f32::NAN, 0.0)];
        assert!(gesture.update(&broken, &config, 1.0).is_none());
        assert_eq!(gesture.last_pinch_distance(), Some(50.0));

        assert!(ZoomGesture::start(&broken).is_none());
    }
}

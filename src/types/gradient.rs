//! Gradient definitions and evaluation.
//!
//! A gradient is two independent piecewise curves over `t` in [0, 1]: one
//! for RGB colour and one for alpha. Each curve is a list of keys sorted by
//! time; evaluation finds the keys bracketing `t` and either interpolates
//! between them or holds the lower key, depending on the interpolation mode.

use std::borrow::Cow;

use palette::{IntoColor, LinSrgb, Oklab, Srgb, Srgba};
use serde::Deserialize;

use crate::error::{GradError, Result};

/// How values between two keys are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Linear interpolation of each sRGB channel.
    #[default]
    Blend,
    /// Step function: the nearest key at or below `t` wins.
    Fixed,
    /// Colour interpolated in Oklab, alpha linearly.
    #[serde(alias = "perceptual-blend")]
    Perceptual,
}

/// A colour key: an RGB colour pinned at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorKey {
    pub time: f32,
    pub color: Srgb<f32>,
}

impl ColorKey {
    pub fn new(time: f32, color: Srgb<f32>) -> Self {
        Self { time, color }
    }
}

/// An alpha key: an opacity pinned at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaKey {
    pub time: f32,
    pub alpha: f32,
}

impl AlphaKey {
    pub fn new(time: f32, alpha: f32) -> Self {
        Self { time, alpha }
    }
}

/// Something pinned to a position on the gradient.
trait Keyed: Copy {
    fn time(&self) -> f32;

    /// Key time as used for ordering and lookup.
    fn position(&self) -> f32 {
        clamp_unit(self.time())
    }
}

impl Keyed for ColorKey {
    fn time(&self) -> f32 {
        self.time
    }
}

impl Keyed for AlphaKey {
    fn time(&self) -> f32 {
        self.time
    }
}

/// A colour gradient with independent colour and alpha keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    colors: Vec<ColorKey>,
    alphas: Vec<AlphaKey>,
    mode: InterpolationMode,
}

impl Gradient {
    /// Create a gradient, sorting keys by time.
    ///
    /// The sort is stable, so keys sharing a time keep their given order and
    /// the last of them wins when sampling at or after that time.
    pub fn new(
        mut colors: Vec<ColorKey>,
        mut alphas: Vec<AlphaKey>,
        mode: InterpolationMode,
    ) -> Result<Self> {
        if colors.is_empty() {
            return Err(GradError::EmptyGradient { kind: "colour" });
        }
        if alphas.is_empty() {
            return Err(GradError::EmptyGradient { kind: "alpha" });
        }

        sort_keys(&mut colors);
        sort_keys(&mut alphas);

        Ok(Self {
            colors,
            alphas,
            mode,
        })
    }

    /// Red at 0.0, green at 0.5, blue at 1.0, fully opaque.
    pub fn fallback() -> Self {
        Self {
            colors: vec![
                ColorKey::new(0.0, Srgb::new(1.0, 0.0, 0.0)),
                ColorKey::new(0.5, Srgb::new(0.0, 1.0, 0.0)),
                ColorKey::new(1.0, Srgb::new(0.0, 0.0, 1.0)),
            ],
            alphas: vec![AlphaKey::new(0.0, 1.0), AlphaKey::new(1.0, 1.0)],
            mode: InterpolationMode::Blend,
        }
    }

    pub fn colors(&self) -> &[ColorKey] {
        &self.colors
    }

    pub fn alphas(&self) -> &[AlphaKey] {
        &self.alphas
    }

    pub fn mode(&self) -> InterpolationMode {
        self.mode
    }

    /// Evaluate the gradient at `t`.
    ///
    /// `t` is clamped to [0, 1] (NaN reads as 0). Before the first key and
    /// after the last key the boundary key's value is held.
    pub fn evaluate(&self, t: f32) -> Srgba<f32> {
        let t = clamp_unit(t);

        let color = match bracket(&self.colors, t) {
            Span::Hold(key) => key.color,
            Span::Between(left, _, _) if self.mode == InterpolationMode::Fixed => left.color,
            Span::Between(left, right, f) if self.mode == InterpolationMode::Perceptual => {
                mix_oklab(left.color, right.color, f)
            }
            Span::Between(left, right, f) => Srgb::new(
                lerp(left.color.red, right.color.red, f),
                lerp(left.color.green, right.color.green, f),
                lerp(left.color.blue, right.color.blue, f),
            ),
        };

        let alpha = match bracket(&self.alphas, t) {
            Span::Hold(key) => key.alpha,
            Span::Between(left, _, _) if self.mode == InterpolationMode::Fixed => left.alpha,
            Span::Between(left, right, f) => lerp(left.alpha, right.alpha, f),
        };

        Srgba::new(color.red, color.green, color.blue, alpha)
    }
}

/// An ordered list of gradients, stacked into bands when rasterized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientSet {
    gradients: Vec<Gradient>,
}

impl GradientSet {
    pub fn new(gradients: Vec<Gradient>) -> Self {
        Self { gradients }
    }

    /// The gradients as given, possibly empty.
    pub fn gradients(&self) -> &[Gradient] {
        &self.gradients
    }

    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    /// The gradients to rasterize: the set itself, or the fallback
    /// gradient alone when the set is empty.
    pub fn effective(&self) -> Cow<'_, [Gradient]> {
        if self.gradients.is_empty() {
            Cow::Owned(vec![Gradient::fallback()])
        } else {
            Cow::Borrowed(&self.gradients)
        }
    }
}

impl From<Vec<Gradient>> for GradientSet {
    fn from(gradients: Vec<Gradient>) -> Self {
        Self::new(gradients)
    }
}

/// Where `t` falls relative to a key list.
enum Span<K> {
    /// Before the first key, at or after the last key.
    Hold(K),
    /// Strictly inside `[left, right)` with the normalized offset.
    Between(K, K, f32),
}

fn bracket<K: Keyed>(keys: &[K], t: f32) -> Span<K> {
    let at_or_before = keys.partition_point(|k| k.position() <= t);

    if at_or_before == 0 {
        return Span::Hold(keys[0]);
    }
    if at_or_before == keys.len() {
        return Span::Hold(keys[keys.len() - 1]);
    }

    let left = keys[at_or_before - 1];
    let right = keys[at_or_before];
    // right.position() > t >= left.position(), so the span is never zero
    let f = (t - left.position()) / (right.position() - left.position());
    Span::Between(left, right, f)
}

fn sort_keys<K: Keyed>(keys: &mut [K]) {
    keys.sort_by(|a, b| a.position().total_cmp(&b.position()));
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn lerp(a: f32, b: f32, f: f32) -> f32 {
    a + (b - a) * f
}

fn mix_oklab(a: Srgb<f32>, b: Srgb<f32>, f: f32) -> Srgb<f32> {
    let a: Oklab = a.into_linear::<f32>().into_color();
    let b: Oklab = b.into_linear::<f32>().into_color();

    let mixed = Oklab::new(lerp(a.l, b.l, f), lerp(a.a, b.a, f), lerp(a.b, b.b, f));
    let linear: LinSrgb = mixed.into_color();
    Srgb::from_linear(linear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn rgb(hex: &str) -> Srgb<f32> {
        Colour::from_hex(hex).unwrap().to_srgb()
    }

    fn red_to_blue(mode: InterpolationMode) -> Gradient {
        Gradient::new(
            vec![ColorKey::new(0.0, rgb("#F00")), ColorKey::new(1.0, rgb("#00F"))],
            vec![AlphaKey::new(0.0, 1.0), AlphaKey::new(1.0, 0.0)],
            mode,
        )
        .unwrap()
    }

    fn sample(gradient: &Gradient, t: f32) -> Colour {
        Colour::from_srgba(gradient.evaluate(t))
    }

    #[test]
    fn test_empty_keys_rejected() {
        let err = Gradient::new(vec![], vec![AlphaKey::new(0.0, 1.0)], InterpolationMode::Blend);
        assert!(matches!(err, Err(GradError::EmptyGradient { kind: "colour" })));

        let err = Gradient::new(
            vec![ColorKey::new(0.0, rgb("#FFF"))],
            vec![],
            InterpolationMode::Blend,
        );
        assert!(matches!(err, Err(GradError::EmptyGradient { kind: "alpha" })));
    }

    #[test]
    fn test_endpoints() {
        let g = red_to_blue(InterpolationMode::Blend);
        assert_eq!(sample(&g, 0.0), Colour::new(255, 0, 0, 255));
        assert_eq!(sample(&g, 1.0), Colour::new(0, 0, 255, 0));
    }

    #[test]
    fn test_blend_midpoint() {
        let g = red_to_blue(InterpolationMode::Blend);
        assert_eq!(sample(&g, 0.5), Colour::new(128, 0, 128, 128));
    }

    #[test]
    fn test_out_of_range_t_clamps() {
        let g = red_to_blue(InterpolationMode::Blend);
        for t in [-1.0, -0.001, f32::NEG_INFINITY, f32::NAN] {
            assert_eq!(g.evaluate(t), g.evaluate(0.0));
        }
        for t in [1.001, 7.5, f32::INFINITY] {
            assert_eq!(g.evaluate(t), g.evaluate(1.0));
        }
    }

    #[test]
    fn test_single_keys_are_constant() {
        let g = Gradient::new(
            vec![ColorKey::new(0.3, rgb("#336699"))],
            vec![AlphaKey::new(0.8, 0.5)],
            InterpolationMode::Blend,
        )
        .unwrap();

        let expected = Colour::new(0x33, 0x66, 0x99, 128);
        for t in [0.0, 0.1, 0.3, 0.5, 0.8, 1.0] {
            assert_eq!(sample(&g, t), expected);
        }
    }

    #[test]
    fn test_clamp_to_edge_keys() {
        let g = Gradient::new(
            vec![ColorKey::new(0.25, rgb("#F00")), ColorKey::new(0.75, rgb("#00F"))],
            vec![AlphaKey::new(0.0, 1.0)],
            InterpolationMode::Blend,
        )
        .unwrap();

        assert_eq!(sample(&g, 0.0), Colour::RED);
        assert_eq!(sample(&g, 0.2), Colour::RED);
        assert_eq!(sample(&g, 0.9), Colour::BLUE);
        assert_eq!(sample(&g, 0.5), Colour::rgb(128, 0, 128));
    }

    #[test]
    fn test_fixed_holds_left_key() {
        let g = red_to_blue(InterpolationMode::Fixed);
        assert_eq!(sample(&g, 0.0), Colour::new(255, 0, 0, 255));
        assert_eq!(sample(&g, 0.5), Colour::new(255, 0, 0, 255));
        assert_eq!(sample(&g, 0.999), Colour::new(255, 0, 0, 255));
        assert_eq!(sample(&g, 1.0), Colour::new(0, 0, 255, 0));
    }

    #[test]
    fn test_keys_sorted_on_construction() {
        let g = Gradient::new(
            vec![ColorKey::new(1.0, rgb("#00F")), ColorKey::new(0.0, rgb("#F00"))],
            vec![AlphaKey::new(0.0, 1.0)],
            InterpolationMode::Blend,
        )
        .unwrap();

        assert_eq!(g.colors()[0].time, 0.0);
        assert_eq!(sample(&g, 0.0), Colour::RED);
    }

    #[test]
    fn test_duplicate_times_last_wins() {
        let g = Gradient::new(
            vec![
                ColorKey::new(0.0, rgb("#000")),
                ColorKey::new(0.5, rgb("#F00")),
                ColorKey::new(0.5, rgb("#0F0")),
                ColorKey::new(1.0, rgb("#000")),
            ],
            vec![AlphaKey::new(0.0, 1.0)],
            InterpolationMode::Blend,
        )
        .unwrap();

        assert_eq!(sample(&g, 0.5), Colour::GREEN);
        // Approaching from below blends toward the first key at 0.5
        assert_eq!(sample(&g, 0.25), Colour::rgb(128, 0, 0));
    }

    #[test]
    fn test_key_times_clamped_at_evaluation() {
        let g = Gradient::new(
            vec![ColorKey::new(-1.0, rgb("#F00")), ColorKey::new(2.0, rgb("#00F"))],
            vec![AlphaKey::new(0.0, 1.0)],
            InterpolationMode::Blend,
        )
        .unwrap();

        // Stored as given
        assert_eq!(g.colors()[0].time, -1.0);
        // Behaves like keys at 0 and 1
        assert_eq!(sample(&g, 0.5), Colour::rgb(128, 0, 128));
    }

    #[test]
    fn test_perceptual_matches_blend_at_keys() {
        let blend = red_to_blue(InterpolationMode::Blend);
        let perceptual = red_to_blue(InterpolationMode::Perceptual);

        assert_eq!(sample(&perceptual, 0.0), sample(&blend, 0.0));
        assert_eq!(sample(&perceptual, 1.0), sample(&blend, 1.0));

        let mid_blend = sample(&blend, 0.5);
        let mid_perceptual = sample(&perceptual, 0.5);
        assert_eq!(mid_perceptual.a, mid_blend.a);
        assert_ne!(mid_perceptual, mid_blend);
    }

    #[test]
    fn test_fallback_gradient() {
        let g = Gradient::fallback();
        assert_eq!(sample(&g, 0.0), Colour::RED);
        assert_eq!(sample(&g, 0.5), Colour::GREEN);
        assert_eq!(sample(&g, 1.0), Colour::BLUE);
        assert_eq!(sample(&g, 0.25), Colour::rgb(128, 128, 0));
    }

    #[test]
    fn test_effective_substitutes_fallback() {
        let empty = GradientSet::default();
        assert!(empty.is_empty());
        assert_eq!(&*empty.effective(), &[Gradient::fallback()]);

        let set = GradientSet::new(vec![red_to_blue(InterpolationMode::Fixed)]);
        assert_eq!(set.effective().len(), 1);
        assert_eq!(set.effective()[0].mode(), InterpolationMode::Fixed);
    }
}

use nalgebra::Vector3;

use crate::components::Section;
use crate::utils::{lerp_unclamped, GeometryError, Result, SpanAxis};

/// An ordered run of sections viewed along a spanwise axis.
///
/// All queries are pure and re-entrant; integration may call them any number
/// of times.
#[derive(Debug, Clone, Copy)]
pub struct Stations<'a> {
    sections: &'a [Section],
    axis: SpanAxis,
}

impl<'a> Stations<'a> {
    pub fn new(sections: &'a [Section], axis: SpanAxis) -> Self {
        Self { sections, axis }
    }

    pub fn sections(&self) -> &'a [Section] {
        self.sections
    }

    pub fn axis(&self) -> SpanAxis {
        self.axis
    }

    /// Spanwise coordinate of the `index`th station.
    pub fn coordinate(&self, index: usize) -> f64 {
        self.axis.coordinate(self.sections[index].position())
    }

    /// First and last spanwise coordinates.
    pub fn range(&self) -> (f64, f64) {
        match self.sections {
            [] => (0.0, 0.0),
            [only] => {
                let s = self.axis.coordinate(only.position());
                (s, s)
            }
            [first, .., last] => (
                self.axis.coordinate(first.position()),
                self.axis.coordinate(last.position()),
            ),
        }
    }

    /// Checks that coordinates never decrease and that no two consecutive
    /// stations coincide.
    pub fn check_ordering(&self) -> Result<()> {
        for index in 0..self.sections.len().saturating_sub(1) {
            let (s0, s1) = (self.coordinate(index), self.coordinate(index + 1));
            if s1 == s0 {
                return Err(GeometryError::DegenerateGeometry {
                    index,
                    coordinate: s0,
                });
            }
            if s1 < s0 {
                return Err(GeometryError::Validation(format!(
                    "sections must be ordered by spanwise coordinate, got {} after {} at index {}",
                    s1,
                    s0,
                    index + 1
                )));
            }
        }
        Ok(())
    }

    /// Finds the consecutive pair bracketing `s` and the interpolation factor
    /// between them.
    fn bracket(&self, s: f64) -> Result<(&'a Section, &'a Section, f64)> {
        let (min, max) = self.range();
        let out_of_range = GeometryError::OutOfRange {
            coordinate: s,
            min,
            max,
        };
        if !(min..=max).contains(&s) {
            return Err(out_of_range);
        }

        for (index, pair) in self.sections.windows(2).enumerate() {
            let (s0, s1) = (self.coordinate(index), self.coordinate(index + 1));
            if s0 <= s && s <= s1 {
                let width = s1 - s0;
                if width == 0.0 {
                    return Err(GeometryError::DegenerateGeometry {
                        index,
                        coordinate: s0,
                    });
                }
                return Ok((&pair[0], &pair[1], (s - s0) / width));
            }
        }
        Err(out_of_range)
    }

    /// Chord length at spanwise coordinate `s`.
    pub fn chord(&self, s: f64) -> Result<f64> {
        let (a, b, t) = self.bracket(s)?;
        Ok(lerp_unclamped(a.chord(), b.chord(), t))
    }

    /// Chordwise distance of the aerodynamic center from the leading edge at `s`.
    ///
    /// The product `chord * ac_fraction` is interpolated as one quantity, not
    /// formed from separately interpolated chord and fraction.
    pub fn aerodynamic_center_offset(&self, s: f64) -> Result<f64> {
        let (a, b, t) = self.bracket(s)?;
        Ok(lerp_unclamped(a.ac_offset(), b.ac_offset(), t))
    }

    /// Leading-edge position at `s`; the spanwise component is exactly `s`.
    pub fn leading_edge(&self, s: f64) -> Result<Vector3<f64>> {
        let (a, b, t) = self.bracket(s)?;
        let mut edge = a.position().zip_map(b.position(), |p0, p1| lerp_unclamped(p0, p1, t));
        edge[self.axis.index()] = s;
        Ok(edge)
    }

    /// Locus of section aerodynamic centers: the leading edge with the
    /// aerodynamic-center offset added along x.
    pub fn aerodynamic_center_line(&self, s: f64) -> Result<Vector3<f64>> {
        let mut point = self.leading_edge(s)?;
        point.x += self.aerodynamic_center_offset(s)?;
        Ok(point)
    }
}

//! Birth-chart wheel geometry.
//!
//! All angles are degrees clockwise from 12 o'clock on a fixed 300x300
//! canvas centred at (150, 150).

use serde::{Deserialize, Serialize};

use crate::{AscendantPoint, BirthChart, House, Planet, PlanetPlacement, ZodiacSign};

pub const CANVAS_SIZE: f64 = 300.0;
pub const CENTER: CirclePoint = CirclePoint { x: 150.0, y: 150.0 };

pub const OUTER_RADIUS: f64 = 140.0;
pub const INNER_RADIUS: f64 = 100.0;
pub const ZODIAC_RADIUS: f64 = 120.0;
pub const PLANET_RADIUS: f64 = 90.0;
pub const HOUSE_LABEL_RADIUS: f64 = 80.0;

/// Angular width of one sign or house.
pub const HOUSE_SPAN: f64 = 30.0;
/// Shift that centres a house label inside its wedge.
pub const HOUSE_LABEL_OFFSET: f64 = 15.0;

/// Offset of the "ASC" caption from the end of the ascendant line.
const ASCENDANT_LABEL_OFFSET: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePoint {
    pub x: f64,
    pub y: f64,
}

impl CirclePoint {
    pub fn distance_to(&self, other: &CirclePoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> CirclePoint {
        CirclePoint {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Projects a wheel angle onto the canvas. 0° is straight up, 90° is to the
/// right; any real angle is accepted.
pub fn project(angle_degrees: f64, radius: f64) -> CirclePoint {
    let radians = (angle_degrees - 90.0).to_radians();
    CirclePoint {
        x: CENTER.x + radius * radians.cos(),
        y: CENTER.y + radius * radians.sin(),
    }
}

// ---------------------------
// ## Layout elements
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: CirclePoint,
    pub to: CirclePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacGlyph {
    pub sign: ZodiacSign,
    pub position: CirclePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseLabel {
    pub house: House,
    pub position: CirclePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetMarker {
    pub planet: Planet,
    pub placement: PlanetPlacement,
    pub position: CirclePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AscendantMarker {
    pub point: AscendantPoint,
    pub line: Segment,
    pub label_position: CirclePoint,
}

impl AscendantMarker {
    /// The line runs from the centre to the rim along the ascendant degree
    /// in canvas orientation, so 0° points to the right edge (290, 150).
    /// Only the degree matters; the sign is caption text.
    pub fn new(point: AscendantPoint) -> Self {
        let end = project(point.plot_degree() + 90.0, OUTER_RADIUS);
        AscendantMarker {
            point,
            line: Segment {
                from: CENTER,
                to: end,
            },
            label_position: end.offset(ASCENDANT_LABEL_OFFSET, ASCENDANT_LABEL_OFFSET),
        }
    }
}

/// Fully positioned wheel for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub zodiac: Vec<ZodiacGlyph>,
    pub house_labels: Vec<HouseLabel>,
    pub house_boundaries: Vec<Segment>,
    pub planets: Vec<PlanetMarker>,
    pub ascendant: Option<AscendantMarker>,
    pub center: CirclePoint,
}

impl ChartLayout {
    pub fn from_chart(chart: &BirthChart) -> Self {
        let zodiac = ZodiacSign::ALL
            .iter()
            .map(|&sign| ZodiacGlyph {
                sign,
                position: project(sign.index() as f64 * HOUSE_SPAN, ZODIAC_RADIUS),
            })
            .collect();

        let house_labels = House::all()
            .map(|house| {
                let index = f64::from(house.number() - 1);
                HouseLabel {
                    house,
                    position: project(index * HOUSE_SPAN + HOUSE_LABEL_OFFSET, HOUSE_LABEL_RADIUS),
                }
            })
            .collect();

        let house_boundaries = (0..12)
            .map(|index| {
                let angle = f64::from(index) * HOUSE_SPAN;
                Segment {
                    from: project(angle, INNER_RADIUS),
                    to: project(angle, OUTER_RADIUS),
                }
            })
            .collect();

        let planets = chart
            .planets
            .iter()
            .map(|(&planet, placement)| PlanetMarker {
                planet,
                placement: *placement,
                position: project(placement.plot_degree(), PLANET_RADIUS),
            })
            .collect();

        ChartLayout {
            zodiac,
            house_labels,
            house_boundaries,
            planets,
            ascendant: chart.ascendant.map(AscendantMarker::new),
            center: CENTER,
        }
    }
}

/// What the chart panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    /// No chart yet, or the chart has no houses or no planets.
    Unavailable,
    Ready(ChartLayout),
}

impl ChartView {
    pub fn from_chart(chart: Option<&BirthChart>) -> Self {
        match chart {
            Some(chart) if chart.is_renderable() => ChartView::Ready(ChartLayout::from_chart(chart)),
            Some(chart) => {
                tracing::debug!(
                    houses = chart.houses.len(),
                    planets = chart.planets.len(),
                    "birth chart incomplete, showing placeholder"
                );
                ChartView::Unavailable
            }
            None => ChartView::Unavailable,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ChartView::Ready(_))
    }

    pub fn layout(&self) -> Option<&ChartLayout> {
        match self {
            ChartView::Ready(layout) => Some(layout),
            ChartView::Unavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HouseInfo;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    fn assert_point(actual: CirclePoint, x: f64, y: f64) {
        assert_abs_diff_eq!(actual.x, x, epsilon = EPS);
        assert_abs_diff_eq!(actual.y, y, epsilon = EPS);
    }

    fn sample_chart() -> BirthChart {
        let mut chart = BirthChart::default();
        for house in House::all() {
            chart.houses.insert(
                house,
                HouseInfo {
                    name: format!("House {}", house.number()),
                },
            );
        }
        chart.planets.insert(
            Planet::Sun,
            PlanetPlacement {
                sign: ZodiacSign::Leo,
                house: House::Fifth,
                degree: 90.0,
            },
        );
        chart.planets.insert(
            Planet::Moon,
            PlanetPlacement {
                sign: ZodiacSign::Cancer,
                house: House::Fourth,
                degree: f64::NAN,
            },
        );
        chart
    }

    #[test]
    fn test_project_cardinal_points() {
        assert_point(project(0.0, 100.0), 150.0, 50.0);
        assert_point(project(90.0, 100.0), 250.0, 150.0);
        assert_point(project(180.0, 100.0), 150.0, 250.0);
        assert_point(project(270.0, 100.0), 50.0, 150.0);
    }

    #[test]
    fn test_project_zero_radius_is_center() {
        assert_point(project(123.4, 0.0), 150.0, 150.0);
    }

    #[test]
    fn test_project_is_periodic() {
        for angle in [-725.0, -90.0, 0.0, 17.5, 200.0, 359.9] {
            let base = project(angle, 77.0);
            for k in [-3.0, -1.0, 1.0, 4.0] {
                let shifted = project(angle + 360.0 * k, 77.0);
                assert_abs_diff_eq!(base.x, shifted.x, epsilon = 1e-9);
                assert_abs_diff_eq!(base.y, shifted.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_project_keeps_radius() {
        for angle in [0.0, 33.0, 145.5, 271.0, -40.0] {
            for radius in [0.0, 1.0, 80.0, 140.0] {
                assert_abs_diff_eq!(project(angle, radius).distance_to(&CENTER), radius, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_layout_zodiac_ring_starts_at_top() {
        let layout = ChartLayout::from_chart(&sample_chart());
        assert_eq!(layout.zodiac.len(), 12);
        assert_eq!(layout.zodiac[0].sign, ZodiacSign::Aries);
        assert_point(layout.zodiac[0].position, 150.0, 30.0);
        assert_point(layout.zodiac[3].position, 270.0, 150.0);
    }

    #[test]
    fn test_layout_house_labels_are_centred_in_wedges() {
        let layout = ChartLayout::from_chart(&sample_chart());
        assert_eq!(layout.house_labels.len(), 12);
        assert_eq!(layout.house_labels[0].house, House::First);
        let expected = project(15.0, HOUSE_LABEL_RADIUS);
        assert_point(layout.house_labels[0].position, expected.x, expected.y);
        let expected = project(11.0 * 30.0 + 15.0, HOUSE_LABEL_RADIUS);
        assert_point(layout.house_labels[11].position, expected.x, expected.y);
    }

    #[test]
    fn test_layout_house_boundaries_span_the_ring() {
        let layout = ChartLayout::from_chart(&sample_chart());
        assert_eq!(layout.house_boundaries.len(), 12);
        let first = layout.house_boundaries[0];
        assert_point(first.from, 150.0, 50.0);
        assert_point(first.to, 150.0, 10.0);
        for segment in &layout.house_boundaries {
            assert_abs_diff_eq!(segment.from.distance_to(&CENTER), INNER_RADIUS, epsilon = EPS);
            assert_abs_diff_eq!(segment.to.distance_to(&CENTER), OUTER_RADIUS, epsilon = EPS);
        }
    }

    #[test]
    fn test_layout_planets_on_planet_ring() {
        let layout = ChartLayout::from_chart(&sample_chart());
        let sun = layout.planets.iter().find(|m| m.planet == Planet::Sun).unwrap();
        assert_point(sun.position, 240.0, 150.0);
        let moon = layout.planets.iter().find(|m| m.planet == Planet::Moon).unwrap();
        assert_point(moon.position, 150.0, 60.0);
    }

    #[test]
    fn test_layout_without_ascendant() {
        let layout = ChartLayout::from_chart(&sample_chart());
        assert!(layout.ascendant.is_none());
        assert_eq!(layout.center, CENTER);
    }

    #[test]
    fn test_ascendant_line_ignores_sign() {
        for sign in [ZodiacSign::Aries, ZodiacSign::Libra] {
            let marker = AscendantMarker::new(AscendantPoint { sign, degree: 0.0 });
            assert_point(marker.line.from, 150.0, 150.0);
            assert_point(marker.line.to, 290.0, 150.0);
            assert_point(marker.label_position, 295.0, 155.0);
        }
    }

    #[test]
    fn test_ascendant_line_follows_degree() {
        let marker = AscendantMarker::new(AscendantPoint {
            sign: ZodiacSign::Cancer,
            degree: 90.0,
        });
        assert_point(marker.line.to, 150.0, 290.0);
    }

    #[test]
    fn test_view_requires_houses_and_planets() {
        assert_eq!(ChartView::from_chart(None), ChartView::Unavailable);

        let mut chart = sample_chart();
        assert!(ChartView::from_chart(Some(&chart)).is_ready());

        chart.planets.clear();
        assert_eq!(ChartView::from_chart(Some(&chart)), ChartView::Unavailable);

        let mut chart = sample_chart();
        chart.houses.clear();
        assert!(ChartView::from_chart(Some(&chart)).layout().is_none());
    }
}

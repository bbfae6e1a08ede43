//! Drawing primitives, SVG output and the localized chart legend.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::i18n::Translator;
use crate::projection::{ChartLayout, ChartView, CirclePoint, CANVAS_SIZE, CENTER, INNER_RADIUS, OUTER_RADIUS};
use crate::BirthChart;

// ---------------------------
// ## Primitives
// ---------------------------

/// Color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE_80: Color = Color { r: 255, g: 255, b: 255, a: 204 };
    pub const PURPLE_20: Color = Color { r: 175, g: 82, b: 222, a: 51 };
    pub const PURPLE_30: Color = Color { r: 175, g: 82, b: 222, a: 77 };
    pub const PURPLE_80: Color = Color { r: 175, g: 82, b: 222, a: 204 };
    pub const BLUE: Color = Color { r: 0, g: 122, b: 255, a: 255 };
    pub const BLUE_30: Color = Color { r: 0, g: 122, b: 255, a: 77 };
    pub const ORANGE: Color = Color { r: 255, g: 149, b: 0, a: 255 };
    pub const YELLOW: Color = Color { r: 255, g: 204, b: 0, a: 255 };
    pub const YELLOW_20: Color = Color { r: 255, g: 204, b: 0, a: 51 };
    pub const YELLOW_80: Color = Color { r: 255, g: 204, b: 0, a: 204 };
    pub const GREEN: Color = Color { r: 52, g: 199, b: 89, a: 255 };
    pub const GREEN_80: Color = Color { r: 52, g: 199, b: 89, a: 204 };
    pub const GRAY: Color = Color { r: 142, g: 142, b: 147, a: 255 };

    /// Convert to CSS string
    pub fn to_css_string(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.2})",
                self.r,
                self.g,
                self.b,
                f32::from(self.a) / 255.0
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle {
        center: CirclePoint,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        from: CirclePoint,
        to: CirclePoint,
        stroke: Stroke,
    },
    Text {
        position: CirclePoint,
        content: String,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    },
}

impl fmt::Display for Shape {
    /// Writes the shape as a single SVG element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                let fill = fill.map_or_else(|| "none".to_string(), |c| c.to_css_string());
                write!(
                    f,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                    num(center.x),
                    num(center.y),
                    num(*radius),
                    fill
                )?;
                if let Some(stroke) = stroke {
                    write!(
                        f,
                        r#" stroke="{}" stroke-width="{}""#,
                        stroke.color.to_css_string(),
                        num(stroke.width)
                    )?;
                }
                f.write_str("/>")?;
            }
            Shape::Line { from, to, stroke } => {
                write!(
                    f,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                    num(from.x),
                    num(from.y),
                    num(to.x),
                    num(to.y),
                    stroke.color.to_css_string(),
                    num(stroke.width)
                )?;
            }
            Shape::Text {
                position,
                content,
                size,
                color,
                anchor,
            } => {
                let anchor_attrs = match anchor {
                    TextAnchor::Middle => r#" text-anchor="middle" dominant-baseline="middle""#,
                    TextAnchor::Start => "",
                };
                write!(
                    f,
                    r#"<text x="{}" y="{}"{} font-size="{}" fill="{}">{}</text>"#,
                    num(position.x),
                    num(position.y),
                    anchor_attrs,
                    num(*size),
                    color.to_css_string(),
                    escape(content)
                )?;
            }
        }
        Ok(())
    }
}

fn num(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ---------------------------
// ## Wheel
// ---------------------------

impl ChartLayout {
    /// Lowers the layout to shapes in paint order, background first.
    pub fn shapes(&self) -> Vec<Shape> {
        let mut shapes = vec![
            Shape::Circle {
                center: CENTER,
                radius: OUTER_RADIUS,
                fill: Some(Color::WHITE_80),
                stroke: Some(Stroke { color: Color::PURPLE_30, width: 2.0 }),
            },
            Shape::Circle {
                center: CENTER,
                radius: INNER_RADIUS,
                fill: None,
                stroke: Some(Stroke { color: Color::BLUE_30, width: 1.0 }),
            },
        ];

        shapes.extend(self.house_boundaries.iter().map(|segment| Shape::Line {
            from: segment.from,
            to: segment.to,
            stroke: Stroke { color: Color::PURPLE_20, width: 1.0 },
        }));

        shapes.extend(self.zodiac.iter().map(|glyph| Shape::Text {
            position: glyph.position,
            content: glyph.sign.symbol().to_string(),
            size: 18.0,
            color: Color::ORANGE,
            anchor: TextAnchor::Middle,
        }));

        shapes.extend(self.house_labels.iter().map(|label| Shape::Text {
            position: label.position,
            content: label.house.number().to_string(),
            size: 12.0,
            color: Color::BLUE,
            anchor: TextAnchor::Middle,
        }));

        for marker in &self.planets {
            shapes.push(Shape::Circle {
                center: marker.position,
                radius: 8.0,
                fill: Some(Color::YELLOW_20),
                stroke: Some(Stroke { color: Color::YELLOW_80, width: 1.0 }),
            });
            shapes.push(Shape::Text {
                position: marker.position,
                content: marker.planet.symbol().to_string(),
                size: 12.0,
                color: Color::YELLOW,
                anchor: TextAnchor::Middle,
            });
        }

        if let Some(ascendant) = &self.ascendant {
            shapes.push(Shape::Line {
                from: ascendant.line.from,
                to: ascendant.line.to,
                stroke: Stroke { color: Color::GREEN_80, width: 2.0 },
            });
            shapes.push(Shape::Text {
                position: ascendant.label_position,
                content: "ASC".to_string(),
                size: 10.0,
                color: Color::GREEN,
                anchor: TextAnchor::Start,
            });
        }

        shapes.push(Shape::Circle {
            center: self.center,
            radius: 3.0,
            fill: Some(Color::PURPLE_80),
            stroke: None,
        });

        shapes
    }
}

/// Renders the chart panel as a standalone SVG document. An unavailable
/// chart renders the localized loading placeholder instead of a wheel.
pub fn render_svg(view: &ChartView, translator: &Translator) -> String {
    let shapes = match view {
        ChartView::Ready(layout) => layout.shapes(),
        ChartView::Unavailable => vec![Shape::Text {
            position: CENTER,
            content: translator.translate("chartLoading").to_string(),
            size: 14.0,
            color: Color::GRAY,
            anchor: TextAnchor::Middle,
        }],
    };

    let size = num(CANVAS_SIZE);
    let body: String = shapes.iter().map(|shape| format!("  {}\n", shape)).collect();
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n{body}</svg>\n"
    )
}

// ---------------------------
// ## Legend
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub symbol: String,
    pub text: String,
}

/// Localized captions shown under the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub planets_caption: String,
    pub planets: Vec<LegendEntry>,
    pub houses_caption: String,
    pub houses: Vec<String>,
    pub ascendant: Option<String>,
}

impl Legend {
    /// Lists every planet, the first `house_limit` houses and the rising sign.
    pub fn build(chart: &BirthChart, translator: &Translator, house_limit: usize) -> Self {
        let planets = chart
            .planets
            .iter()
            .map(|(planet, placement)| {
                let house = placement.house.number().to_string();
                LegendEntry {
                    symbol: planet.symbol().to_string(),
                    text: format!(
                        "{}: {} ({})",
                        translator.translate(planet.key()),
                        translator.translate(placement.sign.key()),
                        translator.format("houseOrdinal", &[("n", house.as_str())])
                    ),
                }
            })
            .collect();

        let houses = chart
            .houses
            .iter()
            .take(house_limit)
            .map(|(house, info)| format!("{}. {}", house.number(), info.name))
            .collect();

        let ascendant = chart.ascendant.map(|point| {
            format!(
                "{}: {} ({:.1}°)",
                translator.translate("ascendantSign"),
                translator.translate(point.sign.key()),
                point.plot_degree()
            )
        });

        Legend {
            title: translator.translate("birthChart").to_string(),
            planets_caption: translator.translate("planetsLegend").to_string(),
            planets,
            houses_caption: translator.translate("housesLegend").to_string(),
            houses,
            ascendant,
        }
    }
}

impl fmt::Display for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.planets_caption)?;
        for entry in &self.planets {
            writeln!(f, "  {} {}", entry.symbol, entry.text)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.houses_caption)?;
        for house in &self.houses {
            writeln!(f, "  {}", house)?;
        }
        if let Some(ascendant) = &self.ascendant {
            writeln!(f)?;
            writeln!(f, "{}", ascendant)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::{AscendantPoint, House, HouseInfo, Planet, PlanetPlacement, ZodiacSign};

    fn chart_with_ascendant() -> BirthChart {
        let mut chart = BirthChart::default();
        for house in House::all() {
            chart.houses.insert(
                house,
                HouseInfo {
                    name: format!("H{}", house.number()),
                },
            );
        }
        chart.planets.insert(
            Planet::Sun,
            PlanetPlacement {
                sign: ZodiacSign::Leo,
                house: House::Fifth,
                degree: 120.0,
            },
        );
        chart.ascendant = Some(AscendantPoint {
            sign: ZodiacSign::Aries,
            degree: 12.34,
        });
        chart
    }

    #[test]
    fn test_color_to_css_string() {
        assert_eq!(Color::BLUE.to_css_string(), "rgb(0, 122, 255)");
        assert_eq!(Color::WHITE_80.to_css_string(), "rgba(255, 255, 255, 0.80)");
        assert_eq!(Color::PURPLE_30.to_css_string(), "rgba(175, 82, 222, 0.30)");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(num(150.0), "150");
        assert_eq!(num(10.5), "10.5");
        assert_eq!(num(1.0 / 3.0), "0.33");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_shapes_include_every_element() {
        let layout = ChartLayout::from_chart(&chart_with_ascendant());
        let shapes = layout.shapes();
        // 2 rings, 12 boundaries, 12 signs, 12 house numbers, 1 planet (2), ascendant (2), centre
        assert_eq!(shapes.len(), 2 + 12 + 12 + 12 + 2 + 2 + 1);
        assert!(matches!(shapes.last(), Some(Shape::Circle { radius, .. }) if *radius == 3.0));
    }

    #[test]
    fn test_shapes_without_ascendant() {
        let mut chart = chart_with_ascendant();
        chart.ascendant = None;
        let shapes = ChartLayout::from_chart(&chart).shapes();
        let asc = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Text { content, .. } if content == "ASC"))
            .count();
        assert_eq!(asc, 0);
    }

    #[test]
    fn test_render_ready_chart() {
        let translator = Translator::builtin(Language::En);
        let view = ChartView::from_chart(Some(&chart_with_ascendant()));
        let svg = render_svg(&view, &translator);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="300" height="300""#));
        assert!(svg.contains("♈"));
        assert!(svg.contains("☉"));
        assert!(svg.contains(">ASC</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_placeholder() {
        let translator = Translator::builtin(Language::Tr);
        let svg = render_svg(&ChartView::Unavailable, &translator);
        assert!(svg.contains("Doğum haritası bilgileri yükleniyor..."));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn test_legend_in_turkish() {
        let translator = Translator::builtin(Language::Tr);
        let legend = Legend::build(&chart_with_ascendant(), &translator, 6);
        assert_eq!(legend.title, "Doğum Haritası");
        assert_eq!(legend.planets.len(), 1);
        assert_eq!(legend.planets[0].symbol, "☉");
        assert_eq!(legend.planets[0].text, "Güneş: Aslan (5. ev)");
        assert_eq!(legend.houses.len(), 6);
        assert_eq!(legend.houses[0], "1. H1");
        assert_eq!(legend.ascendant.as_deref(), Some("Yükselen Burç: Koç (12.3°)"));
    }

    #[test]
    fn test_shape_display() {
        let line = Shape::Line {
            from: CENTER,
            to: CirclePoint { x: 290.0, y: 150.0 },
            stroke: Stroke {
                color: Color::YELLOW,
                width: 2.0,
            },
        };
        assert_eq!(
            line.to_string(),
            r#"<line x1="150" y1="150" x2="290" y2="150" stroke="rgb(255, 204, 0)" stroke-width="2"/>"#
        );

        let ring = Shape::Circle {
            center: CENTER,
            radius: 3.0,
            fill: None,
            stroke: Some(Stroke {
                color: Color::BLUE,
                width: 1.0,
            }),
        };
        assert_eq!(
            ring.to_string(),
            r#"<circle cx="150" cy="150" r="3" fill="none" stroke="rgb(0, 122, 255)" stroke-width="1"/>"#
        );
    }

    #[test]
    fn test_legend_clamps_non_finite_ascendant_degree() {
        let mut chart = chart_with_ascendant();
        chart.ascendant = Some(AscendantPoint {
            sign: ZodiacSign::Aries,
            degree: f64::INFINITY,
        });
        let legend = Legend::build(&chart, &Translator::builtin(Language::En), 6);
        assert_eq!(legend.ascendant.as_deref(), Some("Rising Sign: Aries (0.0°)"));

        let marker = ChartLayout::from_chart(&chart).ascendant.unwrap();
        assert_eq!(marker.line.to.x.round(), 290.0);
    }

    #[test]
    fn test_legend_display() {
        let translator = Translator::builtin(Language::En);
        let text = Legend::build(&chart_with_ascendant(), &translator, 2).to_string();
        assert!(text.contains("Sun: Leo (house 5)"));
        assert!(text.contains("2. H2"));
        assert!(!text.contains("3. H3"));
        assert!(text.contains("Rising Sign: Aries (12.3°)"));
    }
}
